//! Ordered codepoint translation table

use std::{fs::read_to_string, path::Path};

use fontremap_font_model::Codepoint;
use indexmap::IndexMap;
use log::debug;

use crate::{CodepointMapError, Result};

/// Ordered mapping of source codepoint → destination codepoint
///
/// Iteration follows insertion order, which is the order the merge applies
/// the pairs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointMap {
    pairs: IndexMap<Codepoint, Codepoint>,
}

impl CodepointMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `src` to `dst`, replacing any earlier destination for `src`
    pub fn insert(&mut self, src: Codepoint, dst: Codepoint) -> Result<Option<Codepoint>> {
        check_range(src)?;
        check_range(dst)?;
        Ok(self.pairs.insert(src, dst))
    }

    /// Map `src` to `dst` unless `src` already has a destination
    pub(crate) fn insert_first(&mut self, src: Codepoint, dst: Codepoint) -> Result<bool> {
        check_range(src)?;
        check_range(dst)?;
        if self.pairs.contains_key(&src) {
            return Ok(false);
        }
        self.pairs.insert(src, dst);
        Ok(true)
    }

    /// Collect `char` pairs, which are always in range; the first pair wins
    /// for a repeated source
    pub(crate) fn from_char_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut map = IndexMap::new();
        for (src, dst) in pairs {
            map.entry(Codepoint::from(src)).or_insert(Codepoint::from(dst));
        }
        Self { pairs: map }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Codepoint, Codepoint)>) -> Result<Self> {
        let mut map = Self::new();
        for (src, dst) in pairs {
            map.insert(src, dst)?;
        }
        Ok(map)
    }

    /// Parse an OpenCC-style mapping text
    ///
    /// Each line is `source<TAB>destination [alternatives...]`; only the
    /// first destination is used. A character may be written literally or
    /// as `U+XXXX` / `0xXXXX`. Blank lines and `#` comments are skipped, and
    /// a source listed twice keeps its first destination.
    pub fn parse_pairs(text: &str) -> Result<Self> {
        let mut map = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let (Some(src), Some(dst)) = (tokens.next(), tokens.next()) else {
                return Err(invalid(line_no, "expected a source and a destination"));
            };
            let src = parse_token(src).map_err(|reason| invalid(line_no, reason))?;
            let dst = parse_token(dst).map_err(|reason| invalid(line_no, reason))?;

            if !map.insert_first(src, dst).map_err(|e| invalid(line_no, e.to_string()))? {
                debug!("line {line_no}: {src} already mapped, keeping the first destination");
            }
        }
        Ok(map)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let map = Self::parse_pairs(&read_to_string(path)?)?;
        debug!("Loaded {} pairs from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn get(&self, src: Codepoint) -> Option<Codepoint> {
        self.pairs.get(&src).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Codepoint, Codepoint)> + '_ {
        self.pairs.iter().map(|(src, dst)| (*src, *dst))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when every pair maps a codepoint to itself
    pub fn is_identity(&self) -> bool {
        self.pairs.iter().all(|(src, dst)| src == dst)
    }

    /// Swap sources and destinations; the first pair wins when several
    /// sources share a destination
    pub fn inverted(&self) -> Self {
        let mut pairs = IndexMap::with_capacity(self.pairs.len());
        for (src, dst) in &self.pairs {
            pairs.entry(*dst).or_insert(*src);
        }
        Self { pairs }
    }
}

impl<'a> IntoIterator for &'a CodepointMap {
    type Item = (Codepoint, Codepoint);
    type IntoIter = Box<dyn Iterator<Item = (Codepoint, Codepoint)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn check_range(cp: Codepoint) -> Result<()> {
    if cp > Codepoint::MAX_UNICODE {
        return Err(CodepointMapError::OutOfRange(cp.to_u32()));
    }
    Ok(())
}

fn invalid(line: usize, reason: impl Into<String>) -> CodepointMapError {
    CodepointMapError::InvalidLine { line, reason: reason.into() }
}

fn parse_token(token: &str) -> std::result::Result<Codepoint, String> {
    let hex = token
        .strip_prefix("U+")
        .or_else(|| token.strip_prefix("u+"))
        .or_else(|| token.strip_prefix("0x"))
        .or_else(|| token.strip_prefix("0X"));
    if let Some(hex) = hex {
        return u32::from_str_radix(hex, 16)
            .map(Codepoint::new)
            .map_err(|_| format!("'{token}' is not a hexadecimal codepoint"));
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Codepoint::from(c)),
        _ => Err(format!("'{token}' is not a single character")),
    }
}
