//! CFF / CFF2 tables (PostScript outlines)
//!
//! Charstrings are opaque programs. The remapper only needs to know which
//! glyph names exist, so the table element itself is carried through
//! unchanged and just the `CharString` names are indexed.

use indexmap::IndexSet;

use crate::{glyph_name::GlyphName, xml::Element};

/// TTX tag of the `CFF ` table (the trailing space is dropped)
pub const TAG: &str = "CFF";
pub const TAG_CFF2: &str = "CFF2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CffOutlines {
    element: Element,
    charstrings: IndexSet<GlyphName>,
}

impl CffOutlines {
    pub fn from_element(element: Element) -> Self {
        let charstrings = element
            .descendants("CharString")
            .filter_map(|cs| cs.attr("name"))
            .map(GlyphName::new)
            .collect();
        Self { element, charstrings }
    }

    pub fn to_element(&self) -> Element {
        self.element.clone()
    }

    /// `CFF` or `CFF2`
    pub fn tag(&self) -> &str {
        &self.element.name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.charstrings.contains(name)
    }

    pub fn glyph_names(&self) -> impl Iterator<Item = &GlyphName> {
        self.charstrings.iter()
    }

    pub fn len(&self) -> usize {
        self.charstrings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charstrings.is_empty()
    }
}
