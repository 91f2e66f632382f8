//! Codepoint translation tables
//!
//! A [`CodepointMap`] is an ordered list of source → destination codepoints.
//! Maps come from a built-in [`Preset`] or from an OpenCC-style text file:
//!
//! ```
//! use fontremap_codepoint_map::{CodepointMap, Preset};
//!
//! let preset: Preset = "hans2hant".parse().unwrap();
//! assert!(!preset.codepoint_map().is_empty());
//!
//! let map = CodepointMap::parse_pairs("图\t圖\n").unwrap();
//! assert_eq!(map.len(), 1);
//! ```

mod error;
mod map;
mod pairs;
mod preset;

pub use error::{CodepointMapError, Result};
pub use map::CodepointMap;
pub use preset::Preset;
