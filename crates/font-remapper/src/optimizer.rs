//! Post-merge pass over empty glyphs
//!
//! An empty `uniXXXX` glyph still costs a cmap entry and claims its
//! codepoint, so fallback fonts never get a chance to draw it. Only
//! TrueType fonts are optimized; CFF charstrings are opaque.

use std::collections::HashSet;

use fontremap_font_model::{FontModel, FontModelParts, GlyphName, OutlineStorage};
use log::{debug, trace};

use crate::EmptyGlyphPolicy;

/// What [`optimize`] removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optimized {
    pub cmap_entries_removed: usize,
    pub glyphs_dropped: usize,
}

/// Strip cmap entries pointing at empty `uni*` glyphs other than `uni0000`
pub fn optimize(model: &mut FontModel, policy: EmptyGlyphPolicy) -> Optimized {
    let mut result = Optimized::default();
    let FontModelParts { mut glyph_order, outlines, cmap, mut hmtx, mut vmtx } = model.parts_mut();
    let Some(OutlineStorage::TrueType(glyf)) = outlines else {
        debug!("Skipping optimization: no TrueType outlines");
        return result;
    };

    let candidates: Vec<GlyphName> = glyf
        .iter()
        .filter(|(name, glyph)| glyph.is_empty() && name.has_uni_prefix() && !name.is_null_glyph())
        .map(|(name, _)| name.clone())
        .collect();
    if candidates.is_empty() {
        return result;
    }

    if let Some(cmap) = cmap {
        for name in &candidates {
            let removed = cmap.remove_glyph_references(name);
            if removed > 0 {
                trace!("{name}: removed {removed} cmap entries");
            }
            result.cmap_entries_removed += removed;
        }
    }

    if policy == EmptyGlyphPolicy::Drop {
        // composites may still point at an empty glyph
        let components: HashSet<&str> = glyf
            .iter()
            .flat_map(|(_, glyph)| glyph.element().descendants("component"))
            .filter_map(|component| component.attr("glyphName"))
            .collect();
        let droppable: Vec<&GlyphName> =
            candidates.iter().filter(|name| !components.contains(name.as_str())).collect();

        for name in droppable {
            glyf.remove(name);
            if let Some(hmtx) = hmtx.as_deref_mut() {
                hmtx.remove(name);
            }
            if let Some(vmtx) = vmtx.as_deref_mut() {
                vmtx.remove(name);
            }
            if let Some(order) = glyph_order.as_deref_mut() {
                order.remove(name);
            }
            result.glyphs_dropped += 1;
        }
    }

    debug!(
        "Optimized {} empty glyphs: {} cmap entries removed, {} glyphs dropped",
        candidates.len(),
        result.cmap_entries_removed,
        result.glyphs_dropped
    );
    result
}
