//! Typed in-memory model of TTX font dumps.
//!
//! A [`FontModel`] is loaded from the XML interchange form written by
//! `ttx`, edited through its typed tables, and written back. Tables the
//! model does not type are round-tripped untouched.
//!
//! # Example
//!
//! ```no_run
//! use fontremap_font_model::FontModel;
//!
//! let model = FontModel::from_ttx_file("font.ttx").unwrap();
//! println!("{} glyphs", model.glyph_count());
//! model.write_ttx_file("copy.ttx").unwrap();
//! ```

mod error;
mod glyph_name;
mod model;
pub mod tables;
mod types;
pub mod xml;

pub use error::{ModelError, Result};
pub use glyph_name::{GlyphName, NULL_GLYPH};
pub use model::{FontModel, FontModelParts, OutlineKind, OutlineStorage};
pub use tables::{
    cff::CffOutlines,
    cmap::{CharacterMap, CmapEntry, CmapSubtable, Upsert},
    glyf::{TrueTypeOutlines, TtGlyph},
    glyph_order::GlyphOrder,
    metrics::MetricsTable,
};
pub use types::{CmapFormat, Codepoint, GlyphId};
