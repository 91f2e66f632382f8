//! Codepoint ↔ glyph name lookup for one font

use std::collections::HashMap;

use fontremap_font_model::{Codepoint, FontModel, GlyphName, OutlineKind, OutlineStorage};
use indexmap::IndexMap;

/// Which glyph each codepoint resolves to, and back
///
/// TrueType fonts are indexed by glyph naming convention: only glyphs named
/// `uniXXXX` are visible. CFF fonts are indexed through their cmap, with the
/// last subtable to mention a codepoint winning.
#[derive(Debug, Clone, Default)]
pub struct GlyphIndex {
    by_codepoint: IndexMap<Codepoint, GlyphName>,
    by_name: HashMap<GlyphName, Vec<Codepoint>>,
}

impl GlyphIndex {
    pub fn build(model: &FontModel, kind: OutlineKind) -> Self {
        let mut index = Self::default();
        match kind {
            OutlineKind::TrueType => {
                if let Some(OutlineStorage::TrueType(glyf)) = model.outlines() {
                    for (name, _) in glyf.iter() {
                        if let Some(cp) = name.codepoint() {
                            index.by_codepoint.insert(cp, name.clone());
                        }
                    }
                }
            }
            OutlineKind::Cff => {
                if let Some(cmap) = model.cmap() {
                    for entry in cmap.entries() {
                        index.by_codepoint.insert(entry.code(), entry.name().clone());
                    }
                }
            }
        }
        index.rebuild_names();
        index
    }

    fn rebuild_names(&mut self) {
        self.by_name.clear();
        for (cp, name) in &self.by_codepoint {
            self.by_name.entry(name.clone()).or_default().push(*cp);
        }
    }

    /// Record a glyph added during a run
    pub(crate) fn insert(&mut self, cp: Codepoint, name: GlyphName) {
        if let Some(previous) = self.by_codepoint.insert(cp, name.clone())
            && let Some(codes) = self.by_name.get_mut(&previous)
        {
            codes.retain(|code| *code != cp);
        }
        self.by_name.entry(name).or_default().push(cp);
    }

    pub fn glyph(&self, cp: Codepoint) -> Option<&GlyphName> {
        self.by_codepoint.get(&cp)
    }

    pub fn contains(&self, cp: Codepoint) -> bool {
        self.by_codepoint.contains_key(&cp)
    }

    /// Codepoints resolving to `name`
    pub fn codepoints(&self, name: &str) -> &[Codepoint] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_codepoint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_codepoint.is_empty()
    }
}
