//! Options for remapping

use std::collections::BTreeSet;

use fontremap_font_model::CmapFormat;

/// What the optimizer does with an empty `uni*` glyph once its cmap
/// entries are gone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyGlyphPolicy {
    /// Keep the glyph record, its metrics and its GlyphOrder entry
    #[default]
    Keep,
    /// Remove them as well
    Drop,
}

/// Options for a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// cmap subtable formats to keep and update; empty keeps all
    pub cmap_formats: BTreeSet<CmapFormat>,

    /// Replace destination glyphs that already have an outline
    ///
    /// For CFF fonts, any codepoint the base cmap maps before the merge is
    /// protected.
    pub overwrite: bool,

    /// Strip cmap entries that point at empty glyphs after merging
    pub optimize: bool,

    pub empty_glyph_policy: EmptyGlyphPolicy,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the cmap to these subtable formats
    pub fn cmap_formats(
        mut self,
        formats: impl IntoIterator<Item = impl Into<CmapFormat>>,
    ) -> Self {
        self.cmap_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single subtable format to the restriction
    pub fn cmap_format(mut self, format: impl Into<CmapFormat>) -> Self {
        self.cmap_formats.insert(format.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn empty_glyph_policy(mut self, policy: EmptyGlyphPolicy) -> Self {
        self.empty_glyph_policy = policy;
        self
    }

    /// Whether the cmap is restricted to a subset of formats
    pub fn restricts_cmap(&self) -> bool {
        !self.cmap_formats.is_empty()
    }
}
