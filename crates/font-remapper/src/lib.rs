//! Glyph merging and codepoint remapping over TTX font models
//!
//! The [`Merger`] walks a [`CodepointMap`](fontremap_codepoint_map::CodepointMap)
//! and, for every `(src, dst)` pair, makes the base font draw `dst` with the
//! source font's glyph for `src`:
//!
//! - TrueType fonts get a copy of the outline named `uniXXXX` after `dst`.
//! - CFF fonts keep their charstrings; `dst` is pointed at the source glyph's
//!   name.
//!
//! Every selected cmap subtable and the hmtx/vmtx tables follow along.
//!
//! # Example
//!
//! ```no_run
//! use fontremap_codepoint_map::Preset;
//! use fontremap_font_model::FontModel;
//! use fontremap_font_remapper::{MergeOptions, Merger};
//!
//! let mut base = FontModel::from_ttx_file("base.ttx").unwrap();
//! let source = FontModel::from_ttx_file("source.ttx").unwrap();
//! let merger = Merger::new(MergeOptions::new().cmap_formats([4u16, 12]).overwrite(true));
//! let report = merger.merge(&mut base, &source, &Preset::Hans2Hant.codepoint_map());
//! println!("{report}");
//! base.write_ttx_file("out.ttx").unwrap();
//! ```

mod cmap_sync;
mod index;
mod merger;
mod optimizer;
mod options;
mod report;

pub use cmap_sync::{select_subtables, upsert, upsert_all};
pub use index::GlyphIndex;
pub use merger::{Merger, remap_font};
pub use optimizer::{Optimized, optimize};
pub use options::{EmptyGlyphPolicy, MergeOptions};
pub use report::MergeReport;
