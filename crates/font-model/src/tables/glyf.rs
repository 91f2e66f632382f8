//! glyf table (TrueType outlines)
//!
//! Outline content (`contour`, `component`, `instructions`) is never
//! interpreted; a glyph is copied, replaced or dropped as a whole.

use indexmap::IndexMap;

use super::{TableShell, required_attr};
use crate::{Result, glyph_name::GlyphName, xml::Element};

pub const TAG: &str = "glyf";
const RECORD: &str = "TTGlyph";

/// One `TTGlyph` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtGlyph {
    element: Element,
}

impl TtGlyph {
    /// An outline-less glyph, as `ttx` writes `space`
    pub fn empty(name: &GlyphName) -> Self {
        Self { element: Element::new(RECORD).with_attr("name", name.as_str()) }
    }

    fn from_record(element: Element) -> Result<(GlyphName, Self)> {
        let name = GlyphName::new(required_attr(&element, RECORD, "name")?);
        Ok((name, Self { element }))
    }

    pub fn name(&self) -> &str {
        self.element.attr("name").unwrap_or_default()
    }

    /// A glyph with no contours and no components draws nothing
    pub fn is_empty(&self) -> bool {
        !self
            .element
            .child_elements()
            .any(|child| child.name == "contour" || child.name == "component")
    }

    /// Deep copy of this glyph under another name
    pub fn renamed(&self, name: &GlyphName) -> Self {
        let mut element = self.element.clone();
        element.set_attr("name", name.as_str());
        Self { element }
    }

    /// Take over another glyph's attributes and outline, keeping this name
    pub fn replace_content(&mut self, other: &TtGlyph) {
        let name = self.name().to_string();
        self.element.attrs = other.element.attrs.clone();
        self.element.set_attr("name", name);
        self.element.children = other.element.children.clone();
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// The `glyf` table: TrueType glyph records keyed by name, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueTypeOutlines {
    shell: TableShell,
    glyphs: IndexMap<GlyphName, TtGlyph>,
}

impl Default for TrueTypeOutlines {
    fn default() -> Self {
        Self { shell: TableShell::new(TAG), glyphs: IndexMap::new() }
    }
}

impl TrueTypeOutlines {
    pub fn from_element(element: Element) -> Result<Self> {
        let (shell, records) = TableShell::split(element, |el| el.name == RECORD);
        let glyphs = records
            .into_iter()
            .map(TtGlyph::from_record)
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self { shell, glyphs })
    }

    pub fn to_element(&self) -> Element {
        self.shell.assemble(self.glyphs.values().map(|g| g.element.clone()))
    }

    pub fn get(&self, name: &str) -> Option<&TtGlyph> {
        self.glyphs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TtGlyph> {
        self.glyphs.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Append a glyph, or replace a same-named one in place
    pub fn insert(&mut self, glyph: TtGlyph) {
        self.glyphs.insert(GlyphName::new(glyph.name()), glyph);
    }

    pub fn remove(&mut self, name: &str) -> Option<TtGlyph> {
        self.glyphs.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlyphName, &TtGlyph)> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
