//! Glyph name type and the `uniXXXX` naming convention
//!
//! TrueType dumps name the canonical glyph of a BMP codepoint `uni` followed
//! by exactly four hex digits. That convention is the only link between a
//! TrueType glyph record and a codepoint, so it lives next to the name type.

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::types::Codepoint;

/// The reserved null glyph name, never stripped from the cmap
pub const NULL_GLYPH: &str = "uni0000";

const UNI_PREFIX: &str = "uni";

/// A glyph name as it appears in TTX `name` attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphName(String);

impl GlyphName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Canonical TrueType name for a BMP codepoint (`uni4E2D`)
    ///
    /// Returns `None` above U+FFFF, which the convention cannot express.
    pub fn for_codepoint(cp: Codepoint) -> Option<Self> {
        cp.is_bmp().then(|| Self(format!("{UNI_PREFIX}{:04X}", cp.to_u32())))
    }

    /// Codepoint encoded by a `uni` + four hex digit name
    ///
    /// The prefix and digits are matched case-insensitively; suffixed names
    /// such as `uni4E2D.vert` do not match.
    pub fn codepoint(&self) -> Option<Codepoint> {
        let (prefix, digits) = self.0.split_at_checked(UNI_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(UNI_PREFIX)
            || digits.len() != 4
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Codepoint::new)
    }

    /// Whether the name starts with the `uni` prefix at all
    pub fn has_uni_prefix(&self) -> bool {
        self.0.starts_with(UNI_PREFIX)
    }

    pub fn is_null_glyph(&self) -> bool {
        self.0 == NULL_GLYPH
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for GlyphName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for GlyphName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for GlyphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GlyphName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GlyphName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<GlyphName> for String {
    fn from(GlyphName(name): GlyphName) -> Self {
        name
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_for_codepoint_uses_upper_hex() {
        let name = GlyphName::for_codepoint(Codepoint::new(0x4E2D)).unwrap();
        assert_eq!(name, "uni4E2D");
        assert_eq!(GlyphName::for_codepoint(Codepoint::new(0x41)).unwrap(), "uni0041");
        assert!(GlyphName::for_codepoint(Codepoint::new(0x2_0000)).is_none());
    }

    #[test]
    fn test_codepoint_convention() {
        assert_eq!(GlyphName::new("uni4E2D").codepoint(), Some(Codepoint::new(0x4E2D)));
        assert_eq!(GlyphName::new("uni4e2d").codepoint(), Some(Codepoint::new(0x4E2D)));
        assert_eq!(GlyphName::new("UNI4E2D").codepoint(), Some(Codepoint::new(0x4E2D)));
        assert_eq!(GlyphName::new("uni4E2D.vert").codepoint(), None);
        assert_eq!(GlyphName::new("uni4E2D4E2E").codepoint(), None);
        assert_eq!(GlyphName::new("uniXYZW").codepoint(), None);
        assert_eq!(GlyphName::new("u4E2D").codepoint(), None);
        assert_eq!(GlyphName::new("A").codepoint(), None);
    }

    #[test]
    fn test_null_glyph() {
        assert!(GlyphName::new("uni0000").is_null_glyph());
        assert!(GlyphName::new("uni0000").has_uni_prefix());
        assert!(!GlyphName::new("space").has_uni_prefix());
    }

    #[test]
    fn test_glyph_name_in_hashmap() {
        let mut map: HashMap<GlyphName, i32> = HashMap::new();
        map.insert(GlyphName::new("A"), 1);
        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.get(&GlyphName::new("A")), Some(&1));
    }
}
