//! End-to-end merges over TTX fixtures

use fontremap_codepoint_map::{CodepointMap, Preset};
use fontremap_font_model::{CmapFormat, Codepoint, FontModel};
use fontremap_font_remapper::{EmptyGlyphPolicy, MergeOptions, MergeReport, Merger, remap_font};
use pretty_assertions::assert_eq;

/// A glyph in a fixture: `Some(x)` draws one contour starting at `x`, `None`
/// is empty
type GlyphSpec<'a> = (&'a str, Option<i32>);

/// One cmap subtable in a fixture
type SubtableSpec<'a> = (u16, &'a [(u32, &'a str)]);

fn cmap_xml(subtables: &[SubtableSpec]) -> String {
    let mut xml = String::from("  <cmap>\n    <tableVersion version=\"0\"/>\n");
    for (format, entries) in subtables {
        if *format == 14 {
            xml.push_str("    <cmap_format_14 platformID=\"0\" platEncID=\"5\">\n");
            for (code, name) in *entries {
                xml.push_str(&format!(
                    "      <map uv=\"{code:#x}\" uvs=\"0xfe00\" name=\"{name}\"/>\n"
                ));
            }
        } else {
            xml.push_str(&format!(
                "    <cmap_format_{format} platformID=\"3\" platEncID=\"1\" language=\"0\">\n"
            ));
            for (code, name) in *entries {
                xml.push_str(&format!("      <map code=\"{code:#x}\" name=\"{name}\"/>\n"));
            }
        }
        xml.push_str(&format!("    </cmap_format_{format}>\n"));
    }
    xml.push_str("  </cmap>\n");
    xml
}

fn width_of(outline: Option<i32>) -> i32 {
    outline.map_or(500, |x| 1000 + x)
}

/// Build a TrueType TTX document; GlyphOrder ids follow `ids` when given
fn truetype_ttx(glyphs: &[GlyphSpec], ids: Option<&[u32]>, subtables: &[SubtableSpec]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ttFont sfntVersion=\"\\x00\\x01\\x00\\x00\" ttLibVersion=\"4.38\">\n",
    );

    xml.push_str("  <GlyphOrder>\n");
    for (idx, (name, _)) in glyphs.iter().enumerate() {
        let id = ids.map_or(idx as u32, |ids| ids[idx]);
        xml.push_str(&format!("    <GlyphID id=\"{id}\" name=\"{name}\"/>\n"));
    }
    xml.push_str("  </GlyphOrder>\n");

    xml.push_str("  <head>\n    <unitsPerEm value=\"1000\"/>\n  </head>\n");

    xml.push_str("  <hmtx>\n");
    for (name, outline) in glyphs {
        let width = width_of(*outline);
        xml.push_str(&format!("    <mtx name=\"{name}\" width=\"{width}\" lsb=\"0\"/>\n"));
    }
    xml.push_str("  </hmtx>\n");

    xml.push_str(&cmap_xml(subtables));

    xml.push_str("  <glyf>\n");
    for (name, outline) in glyphs {
        match outline {
            Some(x) => xml.push_str(&format!(
                "    <TTGlyph name=\"{name}\" xMin=\"{x}\" yMin=\"0\" xMax=\"900\" yMax=\"800\">
      <contour>
        <pt x=\"{x}\" y=\"0\" on=\"1\"/>
        <pt x=\"900\" y=\"800\" on=\"1\"/>
      </contour>
      <instructions/>
    </TTGlyph>\n"
            )),
            None => xml.push_str(&format!("    <TTGlyph name=\"{name}\"/>\n")),
        }
    }
    xml.push_str("  </glyf>\n");

    xml.push_str("  <post>\n    <formatType value=\"2.0\"/>\n  </post>\n</ttFont>\n");
    xml
}

fn truetype(glyphs: &[GlyphSpec], subtables: &[SubtableSpec]) -> FontModel {
    FontModel::from_ttx_str(&truetype_ttx(glyphs, None, subtables)).unwrap()
}

/// Build a CFF TTX document with the given charstring names
fn cff(charstrings: &[&str], widths: &[(&str, u32)], subtables: &[SubtableSpec]) -> FontModel {
    let mut xml = String::from("<ttFont sfntVersion=\"OTTO\">\n  <GlyphOrder>\n");
    for (idx, name) in charstrings.iter().enumerate() {
        xml.push_str(&format!("    <GlyphID id=\"{idx}\" name=\"{name}\"/>\n"));
    }
    xml.push_str("  </GlyphOrder>\n  <hmtx>\n");
    for (name, width) in widths {
        xml.push_str(&format!("    <mtx name=\"{name}\" width=\"{width}\" lsb=\"0\"/>\n"));
    }
    xml.push_str("  </hmtx>\n");
    xml.push_str(&cmap_xml(subtables));
    xml.push_str("  <CFF>\n    <major value=\"1\"/>\n");
    xml.push_str("    <CFFFont name=\"Test-Regular\">\n      <CharStrings>\n");
    for name in charstrings {
        xml.push_str(&format!(
            "        <CharString name=\"{name}\">\n          endchar\n        </CharString>\n"
        ));
    }
    xml.push_str("      </CharStrings>\n    </CFFFont>\n  </CFF>\n</ttFont>\n");
    FontModel::from_ttx_str(&xml).unwrap()
}

fn overwriting() -> Merger {
    Merger::new(MergeOptions::new().overwrite(true))
}

fn map(pairs: &[(u32, u32)]) -> CodepointMap {
    CodepointMap::from_pairs(pairs.iter().map(|(s, d)| (Codepoint::new(*s), Codepoint::new(*d))))
        .unwrap()
}

/// x coordinate of a glyph's first point, identifying which fixture outline it holds
fn outline_of(model: &FontModel, name: &str) -> Option<i32> {
    let glyph = model.truetype_outlines()?.get(name)?;
    glyph.element().find("contour")?.find("pt")?.attr("x")?.parse().ok()
}

fn glyph_id(model: &FontModel, name: &str) -> Option<u32> {
    model.glyph_order()?.id(name).map(|id| id.to_u32())
}

fn mapped(model: &FontModel, code: u32) -> Vec<Option<String>> {
    model
        .cmap()
        .unwrap()
        .subtables()
        .iter()
        .filter(|s| s.format().is_codepoint_keyed())
        .map(|s| s.get(Codepoint::new(code)).map(|name| name.to_string()))
        .collect()
}

const BASE_GLYPHS: &[GlyphSpec] = &[(".notdef", None), ("uni0020", None), ("uni4E2D", Some(100))];
const BASE_CMAP: &[SubtableSpec] = &[
    (4, &[(0x20, "uni0020"), (0x4E2D, "uni4E2D")]),
    (12, &[(0x20, "uni0020"), (0x4E2D, "uni4E2D")]),
];
const SOURCE_GLYPHS: &[GlyphSpec] =
    &[(".notdef", None), ("uni56FE", Some(200)), ("uni4E00", Some(300)), ("uni5927", Some(400))];
const SOURCE_CMAP: &[SubtableSpec] =
    &[(4, &[(0x56FE, "uni56FE"), (0x4E00, "uni4E00"), (0x5927, "uni5927")])];

fn base() -> FontModel {
    truetype(BASE_GLYPHS, BASE_CMAP)
}

fn source() -> FontModel {
    truetype(SOURCE_GLYPHS, SOURCE_CMAP)
}

#[test]
fn test_identity_map_leaves_font_unchanged() {
    let _ = env_logger::builder().is_test(true).try_init();

    let original = base();
    let identity = map(&[(0x20, 0x20), (0x4E2D, 0x4E2D)]);

    for overwrite in [false, true] {
        let mut font = original.clone();
        let source = original.clone();
        Merger::new(MergeOptions::new().overwrite(overwrite)).merge(&mut font, &source, &identity);
        assert_eq!(font, original, "overwrite = {overwrite}");
        assert_eq!(font.to_ttx_string().unwrap(), original.to_ttx_string().unwrap());
    }

    let mut font = original.clone();
    let report = Merger::default().merge(&mut font, &original, &Preset::None.codepoint_map());
    assert_eq!(report, MergeReport::default());
    assert_eq!(font, original);
}

#[test]
fn test_replace_with_overwrite() {
    let mut font = base();
    let report = overwriting().merge(&mut font, &source(), &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(report.remapped, 1);
    assert_eq!(report.glyphs_replaced, 1);
    assert_eq!(report.glyphs_created, 0);
    assert_eq!(outline_of(&font, "uni4E2D"), Some(200));
    assert_eq!(mapped(&font, 0x4E2D), vec![Some("uni4E2D".to_string()); 2]);
    // id and metrics follow the replaced glyph
    assert_eq!(glyph_id(&font, "uni4E2D"), Some(2));
    assert_eq!(font.hmtx().unwrap().value("uni4E2D", "width"), Some("1200"));
    assert_eq!(font.glyph_count(), 3);
    assert!(!font.truetype_outlines().unwrap().contains("uni56FE"));
}

#[test]
fn test_existing_glyph_is_kept_without_overwrite() {
    let original = base();
    let mut font = original.clone();
    let report = Merger::default().merge(&mut font, &source(), &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(report.skipped_existing, 1);
    assert_eq!(report.remapped, 0);
    assert_eq!(outline_of(&font, "uni4E2D"), Some(100));
    assert_eq!(font, original);
}

#[test]
fn test_empty_destination_is_filled_without_overwrite() {
    let mut font = base();
    let report = Merger::default().merge(&mut font, &source(), &map(&[(0x4E00, 0x20)]));

    assert_eq!(report.glyphs_replaced, 1);
    assert_eq!(outline_of(&font, "uni0020"), Some(300));
    assert_eq!(glyph_id(&font, "uni0020"), Some(1));
}

#[test]
fn test_new_glyphs_get_increasing_ids() {
    let ttx = truetype_ttx(BASE_GLYPHS, Some(&[0, 1, 7]), BASE_CMAP);
    let mut font = FontModel::from_ttx_str(&ttx).unwrap();
    let report = Merger::default().merge(
        &mut font,
        &source(),
        &map(&[(0x56FE, 0x56FE), (0x4E00, 0x4E01), (0x5927, 0x56FE)]),
    );

    assert_eq!(report.glyphs_created, 2);
    // the third pair hits a destination created earlier in the run
    assert_eq!(report.skipped_existing, 1);
    assert_eq!(glyph_id(&font, "uni56FE"), Some(8));
    assert_eq!(glyph_id(&font, "uni4E01"), Some(9));
    assert_eq!(outline_of(&font, "uni56FE"), Some(200));
    assert_eq!(outline_of(&font, "uni4E01"), Some(300));
    assert_eq!(font.hmtx().unwrap().value("uni4E01", "width"), Some("1300"));
    assert_eq!(mapped(&font, 0x4E01), vec![Some("uni4E01".to_string()); 2]);

    let cmap = font.cmap().unwrap().to_element();
    let format4 = cmap.find("cmap_format_4").unwrap();
    let last = format4.child_elements().last().unwrap();
    assert_eq!(last.attr("code"), Some("0x4e01"));
}

#[test]
fn test_destinations_outside_bmp_are_skipped() {
    let original = base();
    let mut font = original.clone();
    let report =
        overwriting().merge(&mut font, &source(), &map(&[(0x56FE, 0x2_0000), (0x56FE, 0xFFFF)]));

    // the second pair replaces the first destination in the map
    assert_eq!(report.skipped_out_of_range, 0);
    assert_eq!(report.glyphs_created, 1);

    let mut font = original.clone();
    let report =
        overwriting().merge(&mut font, &source(), &map(&[(0x56FE, 0x2_0000), (0x4E00, 0x1_0000)]));
    assert_eq!(report.skipped_out_of_range, 2);
    assert_eq!(font, original);
}

#[test]
fn test_missing_source_glyph_is_skipped() {
    let original = base();
    let mut font = original.clone();
    let report = overwriting().merge(&mut font, &source(), &map(&[(0x9999, 0x4E2D)]));
    assert_eq!(report.skipped_missing_source, 1);
    assert_eq!(font, original);
}

#[test]
fn test_cmap_restriction_prunes_and_updates() {
    let subtables: &[SubtableSpec] = &[
        (0, &[(0x20, "uni0020")]),
        (4, &[(0x20, "uni0020"), (0x4E2D, "uni4E2D")]),
        (6, &[(0x20, "uni0020")]),
        (12, &[(0x20, "uni0020"), (0x4E2D, "uni4E2D")]),
        (14, &[(0x4E2D, "uni4E2D")]),
    ];
    let mut font = truetype(BASE_GLYPHS, subtables);
    let options = MergeOptions::new().cmap_formats([4u16, 12]);
    let report = Merger::new(options).merge(&mut font, &source(), &map(&[(0x56FE, 0x56FE)]));

    assert_eq!(
        report.subtables_removed,
        vec![CmapFormat::new(0), CmapFormat::new(6), CmapFormat::new(14)]
    );
    assert_eq!(font.cmap().unwrap().formats(), vec![CmapFormat::new(4), CmapFormat::new(12)]);
    assert_eq!(mapped(&font, 0x56FE), vec![Some("uni56FE".to_string()); 2]);
    assert_eq!(report.cmap_entries_inserted, 2);
}

#[test]
fn test_every_subtable_is_updated_without_restriction() {
    let subtables: &[SubtableSpec] = &[
        (0, &[(0x20, "uni0020")]),
        (4, &[(0x20, "uni0020"), (0x4E2D, "uni4E2D")]),
        (14, &[(0x4E2D, "uni4E2D")]),
    ];
    let mut font = truetype(BASE_GLYPHS, subtables);
    Merger::default().merge(&mut font, &source(), &map(&[(0x56FE, 0x56FE)]));

    assert_eq!(font.cmap().unwrap().subtables().len(), 3);
    assert_eq!(mapped(&font, 0x56FE), vec![Some("uni56FE".to_string()); 2]);
    assert!(!font.cmap().unwrap().subtables()[2].references("uni56FE"));
}

#[test]
fn test_cmap_entry_identity_is_numeric() {
    let subtables: &[SubtableSpec] = &[(4, &[(0x4E2D, "uni4E2D")])];
    let ttx = truetype_ttx(BASE_GLYPHS, None, subtables)
        .replace("code=\"0x4e2d\"", "code=\"0x4E2D\"");
    let mut font = FontModel::from_ttx_str(&ttx).unwrap();
    overwriting().merge(&mut font, &source(), &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(font.cmap().unwrap().subtables()[0].len(), 1);
}

#[test]
fn test_lowercase_glyph_name_is_replaced_in_place() {
    let glyphs: &[GlyphSpec] = &[(".notdef", None), ("uni4e2d", Some(100))];
    let subtables: &[SubtableSpec] = &[(4, &[(0x4E2D, "uni4e2d")])];
    let mut font = truetype(glyphs, subtables);
    overwriting().merge(&mut font, &source(), &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(outline_of(&font, "uni4e2d"), Some(200));
    assert!(!font.truetype_outlines().unwrap().contains("uni4E2D"));
    assert_eq!(mapped(&font, 0x4E2D), vec![Some("uni4e2d".to_string())]);
}

#[test]
fn test_optimizer_strips_empty_glyph_entries() {
    let mut font = base();
    let glyphs_before = font.glyph_count();
    let options = MergeOptions::new().optimize(true);
    let report = Merger::new(options).merge(&mut font, &source(), &map(&[(0x56FE, 0x56FE)]));

    assert_eq!(report.cmap_entries_removed, 2);
    assert_eq!(report.glyphs_dropped, 0);
    assert_eq!(font.glyph_count(), glyphs_before + 1);

    let glyf = font.truetype_outlines().unwrap();
    for entry in font.cmap().unwrap().entries() {
        let glyph = glyf.get(entry.name()).unwrap();
        let name = entry.name();
        assert!(!glyph.is_empty() || !name.has_uni_prefix() || name.is_null_glyph());
    }
}

#[test]
fn test_optimizer_drop_policy() {
    let mut font = base();
    let options = MergeOptions::new().optimize(true).empty_glyph_policy(EmptyGlyphPolicy::Drop);
    let report = Merger::new(options).merge(&mut font, &source(), &CodepointMap::new());

    assert_eq!(report.glyphs_dropped, 1);
    assert!(!font.truetype_outlines().unwrap().contains("uni0020"));
    assert!(!font.hmtx().unwrap().contains("uni0020"));
    assert_eq!(glyph_id(&font, "uni0020"), None);
}

#[test]
fn test_remap_font_returns_updated_base() {
    let options = MergeOptions::new().overwrite(true);
    let font = remap_font(base(), &source(), &map(&[(0x56FE, 0x4E2D)]), options);
    assert_eq!(outline_of(&font, "uni4E2D"), Some(200));
}

#[test]
fn test_source_without_metrics_copies_outline_only() {
    let ttx = truetype_ttx(SOURCE_GLYPHS, None, SOURCE_CMAP);
    let start = ttx.find("  <hmtx>").unwrap();
    let end = ttx.find("</hmtx>\n").unwrap() + "</hmtx>\n".len();
    let source = FontModel::from_ttx_str(&format!("{}{}", &ttx[..start], &ttx[end..])).unwrap();
    assert!(source.hmtx().is_none());

    let mut font = base();
    Merger::default().merge(&mut font, &source, &map(&[(0x56FE, 0x56FE)]));
    assert_eq!(outline_of(&font, "uni56FE"), Some(200));
    assert!(!font.hmtx().unwrap().contains("uni56FE"));
}

fn cff_base() -> FontModel {
    cff(
        &[".notdef", "cid00001", "cid00002", "cid00003"],
        &[(".notdef", 500), ("cid00001", 1000), ("cid00002", 980), ("cid00003", 1000)],
        &[
            (4, &[(0x4E2D, "cid00001"), (0x56FE, "cid00002"), (0x5927, "cid00003")]),
            (12, &[(0x4E2D, "cid00001"), (0x56FE, "cid00002")]),
        ],
    )
}

#[test]
fn test_cff_points_destination_at_source_glyph() {
    let mut font = cff_base();
    let source = cff_base();
    let report = overwriting().merge(&mut font, &source, &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(report.remapped, 1);
    assert_eq!(report.glyphs_created + report.glyphs_replaced, 0);
    assert_eq!(mapped(&font, 0x4E2D), vec![Some("cid00002".to_string()); 2]);
    assert_eq!(font.glyph_count(), 4);
}

#[test]
fn test_cff_overwrite_gate() {
    let original = cff_base();
    let mut font = original.clone();
    let report = Merger::default().merge(&mut font, &original, &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(report.skipped_existing, 1);
    assert_eq!(report.remapped, 0);
    assert_eq!(mapped(&font, 0x4E2D), vec![Some("cid00001".to_string()); 2]);
    assert_eq!(font, original);
}

#[test]
fn test_cff_gate_uses_pre_merge_cmap() {
    // destinations pointed at earlier in the run stay writable
    let source = cff_base();
    let mut font = cff_base();
    let pairs = map(&[(0x56FE, 0x9AD8), (0x4E2D, 0x9AD8)]);
    let report = Merger::default().merge(&mut font, &source, &pairs);

    assert_eq!(report.remapped, 2);
    assert_eq!(report.skipped_existing, 0);
    assert_eq!(mapped(&font, 0x9AD8), vec![Some("cid00001".to_string()); 2]);

    // a codepoint only mapped by a pruned subtable still counts as taken
    let mut font = cff(
        &[".notdef", "cid00001", "cid00002"],
        &[],
        &[(4, &[(0x56FE, "cid00002")]), (12, &[(0x4E2D, "cid00001"), (0x56FE, "cid00002")])],
    );
    let options = MergeOptions::new().cmap_formats([4u16]);
    let report = Merger::new(options).merge(&mut font, &source, &map(&[(0x56FE, 0x4E2D)]));

    assert_eq!(report.subtables_removed, vec![CmapFormat::new(12)]);
    assert_eq!(report.skipped_existing, 1);
    assert_eq!(mapped(&font, 0x4E2D), vec![None]);
}

#[test]
fn test_cff_skips_glyphs_missing_from_base() {
    let mut font = cff_base();
    let source = cff(
        &[".notdef", "cid00099"],
        &[("cid00099", 700)],
        &[(4, &[(0x5B57, "cid00099")])],
    );
    let report = overwriting().merge(&mut font, &source, &map(&[(0x5B57, 0x4E2D)]));

    assert_eq!(report.skipped_missing_charstring, 1);
    assert_eq!(mapped(&font, 0x4E2D), vec![Some("cid00001".to_string()); 2]);
}

#[test]
fn test_cff_metrics_follow_source() {
    let mut font = cff_base();
    let source = cff(
        &[".notdef", "cid00001", "cid00002"],
        &[("cid00002", 1024)],
        &[(4, &[(0x56FE, "cid00002")])],
    );
    overwriting().merge(&mut font, &source, &map(&[(0x56FE, 0x4E2D)]));
    assert_eq!(font.hmtx().unwrap().value("cid00002", "width"), Some("1024"));
}

#[test]
fn test_cff_optimizer_is_a_no_op() {
    let original = cff_base();
    let mut font = original.clone();
    let merger = Merger::new(MergeOptions::new().optimize(true));
    let report = merger.merge(&mut font, &original, &CodepointMap::new());
    assert_eq!(report.cmap_entries_removed, 0);
    assert_eq!(font, original);
}

#[test]
fn test_preset_drives_a_merge() {
    // 图 U+56FE is simplified, 圖 U+5716 traditional
    let glyphs: &[GlyphSpec] = &[(".notdef", None), ("uni5716", Some(700))];
    let source = truetype(glyphs, &[(4, &[(0x5716, "uni5716")])]);
    let mut font = base();
    let report = Merger::default().merge(&mut font, &source, &Preset::Hant2Hans.codepoint_map());

    assert_eq!(report.glyphs_created, 1);
    assert_eq!(outline_of(&font, "uni56FE"), Some(700));
    assert_eq!(mapped(&font, 0x56FE), vec![Some("uni56FE".to_string()); 2]);
}
