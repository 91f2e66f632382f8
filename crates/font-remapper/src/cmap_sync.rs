//! Keeping every selected cmap subtable in step with the merge

use std::collections::BTreeSet;

use fontremap_font_model::{CharacterMap, CmapFormat, CmapSubtable, Codepoint, GlyphName, Upsert};
use log::{debug, trace};

use crate::MergeReport;

/// Drop every subtable whose format is not in `formats`
///
/// An empty set selects every subtable. Returns the removed formats.
pub fn select_subtables(
    cmap: &mut CharacterMap,
    formats: &BTreeSet<CmapFormat>,
) -> Vec<CmapFormat> {
    if formats.is_empty() {
        return Vec::new();
    }
    let removed = cmap.retain_formats(formats);
    for format in &removed {
        debug!("Removed cmap {format} subtable");
    }
    removed
}

/// Point `code` at `glyph` in one subtable
pub fn upsert(subtable: &mut CmapSubtable, code: Codepoint, glyph: &GlyphName) -> Upsert {
    subtable.upsert(code, glyph)
}

/// Point `code` at `glyph` in every subtable of `cmap`
pub fn upsert_all(
    cmap: &mut CharacterMap,
    code: Codepoint,
    glyph: &GlyphName,
    report: &mut MergeReport,
) {
    for subtable in cmap.subtables_mut() {
        match upsert(subtable, code, glyph) {
            Upsert::Inserted => report.cmap_entries_inserted += 1,
            Upsert::Rebound => report.cmap_entries_rebound += 1,
            Upsert::Unchanged => {}
            Upsert::NotApplicable => {
                trace!("{code}: {} is not codepoint-keyed", subtable.format());
            }
        }
    }
}
