//! Counters describing what a merge run did

use std::fmt::{self, Display, Formatter};

use fontremap_font_model::CmapFormat;

/// Outcome of [`Merger::merge`](crate::Merger::merge)
///
/// Skips are expected outcomes of a run and are only counted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Map pairs that reached the cmap
    pub remapped: usize,
    /// TrueType glyphs appended to the base
    pub glyphs_created: usize,
    /// TrueType glyphs whose outline was replaced in place
    pub glyphs_replaced: usize,
    /// Destination above U+FFFF
    pub skipped_out_of_range: usize,
    /// Source codepoint has no glyph in the source font
    pub skipped_missing_source: usize,
    /// Destination already has a glyph and overwriting is off
    pub skipped_existing: usize,
    /// CFF: source glyph name has no charstring in the base
    pub skipped_missing_charstring: usize,
    pub cmap_entries_inserted: usize,
    pub cmap_entries_rebound: usize,
    /// Subtables removed by a format restriction
    pub subtables_removed: Vec<CmapFormat>,
    /// Entries removed by the optimizer
    pub cmap_entries_removed: usize,
    /// Empty glyphs removed under [`EmptyGlyphPolicy::Drop`](crate::EmptyGlyphPolicy::Drop)
    pub glyphs_dropped: usize,
}

impl MergeReport {
    pub fn skipped(&self) -> usize {
        self.skipped_out_of_range
            + self.skipped_missing_source
            + self.skipped_existing
            + self.skipped_missing_charstring
    }
}

impl Display for MergeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} remapped ({} created, {} replaced), {} skipped",
            self.remapped,
            self.glyphs_created,
            self.glyphs_replaced,
            self.skipped()
        )?;
        if !self.subtables_removed.is_empty() {
            let formats: Vec<_> =
                self.subtables_removed.iter().map(|f| f.to_u16().to_string()).collect();
            write!(f, ", removed cmap format {}", formats.join("/"))?;
        }
        if self.cmap_entries_removed > 0 {
            write!(f, ", {} empty-glyph cmap entries removed", self.cmap_entries_removed)?;
        }
        if self.glyphs_dropped > 0 {
            write!(f, ", {} empty glyphs dropped", self.glyphs_dropped)?;
        }
        Ok(())
    }
}
