//! Domain-specific newtypes for type safety
//!
//! These types keep codepoints, glyph order ids and cmap formats apart and
//! own the textual forms TTX uses for each of them.

use std::{
    fmt,
    fmt::{Display, Formatter},
    num::ParseIntError,
};

/// A Unicode codepoint
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    /// Highest codepoint a 16-bit cmap subtable can address
    pub const MAX_BMP: Codepoint = Codepoint(0xFFFF);

    /// Highest Unicode scalar value
    pub const MAX_UNICODE: Codepoint = Codepoint(0x10_FFFF);

    pub const fn new(cp: u32) -> Self {
        Self(cp)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn is_bmp(self) -> bool {
        self.0 <= Self::MAX_BMP.0
    }

    /// Convert to a Rust char if valid
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Parse a hexadecimal codepoint with an optional `0x` prefix
    ///
    /// TTX writes cmap codes as `0x4e2d`, but hand-edited dumps also use
    /// upper case digits or drop the prefix.
    pub fn parse_hex(s: &str) -> Result<Self, ParseIntError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u32::from_str_radix(digits, 16).map(Self)
    }

    /// The `code` attribute value written for new cmap entries (`0x4e2d`)
    pub fn to_cmap_code(self) -> String {
        format!("0x{:04x}", self.0)
    }
}

impl From<u32> for Codepoint {
    fn from(cp: u32) -> Self {
        Self(cp)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

impl Display for Codepoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// A glyph id from the `GlyphOrder` table
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphId(pub u32);

impl GlyphId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for GlyphId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for GlyphId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GID{}", self.0)
    }
}

/// A cmap subtable format number
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CmapFormat(pub u16);

impl CmapFormat {
    const TAG_PREFIX: &'static str = "cmap_format_";

    /// Unicode variation sequences; records carry `uv`/`uvs`, not `code`
    pub const VARIATION_SEQUENCES: CmapFormat = CmapFormat(14);

    pub const fn new(format: u16) -> Self {
        Self(format)
    }

    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Parse a TTX subtable tag such as `cmap_format_4`
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.strip_prefix(Self::TAG_PREFIX)?.parse().ok().map(Self)
    }

    pub fn tag(self) -> String {
        format!("{}{}", Self::TAG_PREFIX, self.0)
    }

    /// Formats 0, 2 and 6 only address a narrow code range
    pub const fn is_range_limited(self) -> bool {
        matches!(self.0, 0 | 2 | 6)
    }

    /// Whether records in this format are keyed by a single codepoint
    pub const fn is_codepoint_keyed(self) -> bool {
        self.0 != Self::VARIATION_SEQUENCES.0
    }
}

impl From<u16> for CmapFormat {
    fn from(format: u16) -> Self {
        Self(format)
    }
}

impl Display for CmapFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "format {}", self.0)
    }
}
