//! Main Merger implementation

use fontremap_codepoint_map::CodepointMap;
use fontremap_font_model::{
    CffOutlines, CharacterMap, Codepoint, FontModel, FontModelParts, GlyphName, GlyphOrder,
    MetricsTable, OutlineStorage, TrueTypeOutlines,
};
use log::{debug, info, trace};

use crate::{
    GlyphIndex, MergeOptions, MergeReport,
    cmap_sync::{select_subtables, upsert_all},
    optimizer::optimize,
};

/// Copies glyphs from a source font into a base font along a codepoint map
#[derive(Debug, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Apply every `(src, dst)` pair of `map` to `base`, in map order
    ///
    /// Pairs that cannot be applied are skipped and counted in the report.
    pub fn merge(
        &self,
        base: &mut FontModel,
        source: &FontModel,
        map: &CodepointMap,
    ) -> MergeReport {
        let mut report = MergeReport::default();

        // The base index sees every subtable, including ones about to be pruned
        let kind = base.outline_kind();
        let base_index = kind.map(|kind| GlyphIndex::build(&*base, kind));

        if let Some(cmap) = base.cmap_mut() {
            report.subtables_removed = select_subtables(cmap, &self.options.cmap_formats);
        }

        match kind.zip(base_index) {
            Some((kind, base_index)) if !map.is_empty() => {
                let source_index = GlyphIndex::build(source, kind);
                debug!(
                    "Remapping {} pairs over {kind} outlines ({} source, {} base codepoints)",
                    map.len(),
                    source_index.len(),
                    base_index.len()
                );

                let FontModelParts { glyph_order, outlines, cmap, hmtx, vmtx } = base.parts_mut();
                let metrics = MetricsCopier { hmtx, vmtx, source };
                match outlines {
                    Some(OutlineStorage::TrueType(glyf)) => {
                        let no_outlines = TrueTypeOutlines::default();
                        let source_glyf = source.truetype_outlines().unwrap_or(&no_outlines);
                        let mut target = TrueTypeTarget {
                            glyf,
                            glyph_order,
                            source_glyf,
                            existing: base_index,
                            metrics,
                        };
                        self.apply(&mut target, &source_index, map, cmap, &mut report);
                    }
                    Some(OutlineStorage::Cff(cff)) => {
                        let mut target = CffTarget { cff, existing: base_index, metrics };
                        self.apply(&mut target, &source_index, map, cmap, &mut report);
                    }
                    None => {}
                }
            }
            Some(_) => debug!("Empty codepoint map; nothing to remap"),
            None => debug!("Base font has no glyf or CFF table; nothing to remap"),
        }

        self.finish(base, report)
    }

    fn apply<T: RemapTarget>(
        &self,
        target: &mut T,
        source_index: &GlyphIndex,
        map: &CodepointMap,
        mut cmap: Option<&mut CharacterMap>,
        report: &mut MergeReport,
    ) {
        for (src, dst) in map.iter() {
            if !dst.is_bmp() {
                trace!("{src} -> {dst}: destination outside the BMP");
                report.skipped_out_of_range += 1;
                continue;
            }
            let Some(src_name) = source_index.glyph(src) else {
                trace!("{src} -> {dst}: no source glyph");
                report.skipped_missing_source += 1;
                continue;
            };
            if !self.options.overwrite && target.is_occupied(dst) {
                trace!("{src} -> {dst}: destination already has a glyph");
                report.skipped_existing += 1;
                continue;
            }
            let Some(glyph) = target.resolve_destination(src_name, dst, report) else {
                continue;
            };

            if let Some(cmap) = cmap.as_deref_mut() {
                upsert_all(cmap, dst, &glyph, report);
            }
            report.remapped += 1;
        }
    }

    fn finish(&self, base: &mut FontModel, mut report: MergeReport) -> MergeReport {
        if self.options.optimize {
            let optimized = optimize(base, self.options.empty_glyph_policy);
            report.cmap_entries_removed = optimized.cmap_entries_removed;
            report.glyphs_dropped = optimized.glyphs_dropped;
        }
        info!("{report}");
        report
    }
}

/// Merge with a one-off [`Merger`], returning the updated base
pub fn remap_font(
    mut base: FontModel,
    source: &FontModel,
    map: &CodepointMap,
    options: MergeOptions,
) -> FontModel {
    Merger::new(options).merge(&mut base, source, map);
    base
}

/// How a destination codepoint gets its glyph in one outline format
trait RemapTarget {
    /// Whether `dst` already resolves to a glyph worth protecting
    fn is_occupied(&self, dst: Codepoint) -> bool;

    /// Make `dst` drawable with the source glyph; returns the name the
    /// cmap should point at
    fn resolve_destination(
        &mut self,
        src_name: &GlyphName,
        dst: Codepoint,
        report: &mut MergeReport,
    ) -> Option<GlyphName>;
}

/// TrueType: copy the outline under the destination's `uniXXXX` name
struct TrueTypeTarget<'a> {
    glyf: &'a mut TrueTypeOutlines,
    glyph_order: Option<&'a mut GlyphOrder>,
    source_glyf: &'a TrueTypeOutlines,
    /// Base glyphs by codepoint, including ones added during the run
    existing: GlyphIndex,
    metrics: MetricsCopier<'a>,
}

impl RemapTarget for TrueTypeTarget<'_> {
    fn is_occupied(&self, dst: Codepoint) -> bool {
        self.existing
            .glyph(dst)
            .and_then(|name| self.glyf.get(name))
            .is_some_and(|glyph| !glyph.is_empty())
    }

    fn resolve_destination(
        &mut self,
        src_name: &GlyphName,
        dst: Codepoint,
        report: &mut MergeReport,
    ) -> Option<GlyphName> {
        let Some(source_glyph) = self.source_glyf.get(src_name) else {
            report.skipped_missing_source += 1;
            return None;
        };

        let target = match self.existing.glyph(dst) {
            Some(name) => name.clone(),
            None => GlyphName::for_codepoint(dst)?,
        };

        if let Some(glyph) = self.glyf.get_mut(&target) {
            glyph.replace_content(source_glyph);
            trace!("{src_name} -> {target}: replaced");
            report.glyphs_replaced += 1;
        } else {
            self.glyf.insert(source_glyph.renamed(&target));
            if let Some(order) = self.glyph_order.as_deref_mut()
                && !order.contains(&target)
            {
                let id = order.push_next(target.clone());
                trace!("{src_name} -> {target}: added as glyph {id}");
            }
            self.existing.insert(dst, target.clone());
            report.glyphs_created += 1;
        }

        self.metrics.copy(src_name, &target);
        Some(target)
    }
}

/// CFF: point the destination at the source glyph's own name
struct CffTarget<'a> {
    cff: &'a CffOutlines,
    /// Base cmap before the run; destinations pointed at during the run
    /// stay writable
    existing: GlyphIndex,
    metrics: MetricsCopier<'a>,
}

impl RemapTarget for CffTarget<'_> {
    fn is_occupied(&self, dst: Codepoint) -> bool {
        self.existing.contains(dst)
    }

    fn resolve_destination(
        &mut self,
        src_name: &GlyphName,
        dst: Codepoint,
        report: &mut MergeReport,
    ) -> Option<GlyphName> {
        if !self.cff.contains(src_name) {
            trace!("{src_name} -> {dst}: no charstring in base");
            report.skipped_missing_charstring += 1;
            return None;
        }
        self.metrics.copy(src_name, src_name);
        Some(src_name.clone())
    }
}

/// Copies source hmtx/vmtx records into the base; a missing table on
/// either side skips that axis
struct MetricsCopier<'a> {
    hmtx: Option<&'a mut MetricsTable>,
    vmtx: Option<&'a mut MetricsTable>,
    source: &'a FontModel,
}

impl MetricsCopier<'_> {
    fn copy(&mut self, src_name: &str, target: &GlyphName) {
        if let (Some(base), Some(source)) = (self.hmtx.as_deref_mut(), self.source.hmtx()) {
            base.copy_from(source, src_name, target);
        }
        if let (Some(base), Some(source)) = (self.vmtx.as_deref_mut(), self.source.vmtx()) {
            base.copy_from(source, src_name, target);
        }
    }
}
