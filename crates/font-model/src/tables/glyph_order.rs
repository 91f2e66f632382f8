//! GlyphOrder table
//!
//! `ttx` numbers glyphs by position and ignores the `id` attribute when
//! compiling, but the ids are what the remapper uses to hand out fresh
//! numbers, so they are tracked explicitly here.

use indexmap::IndexMap;

use super::{TableShell, required_attr};
use crate::{ModelError, Result, glyph_name::GlyphName, types::GlyphId, xml::Element};

pub const TAG: &str = "GlyphOrder";
const RECORD: &str = "GlyphID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphOrder {
    shell: TableShell,
    ids: IndexMap<GlyphName, GlyphId>,
    max_id: Option<GlyphId>,
}

impl Default for GlyphOrder {
    fn default() -> Self {
        Self { shell: TableShell::new(TAG), ids: IndexMap::new(), max_id: None }
    }
}

impl GlyphOrder {
    pub fn from_element(element: Element) -> Result<Self> {
        let (shell, records) = TableShell::split(element, |el| el.name == RECORD);
        let mut order = Self { shell, ids: IndexMap::with_capacity(records.len()), max_id: None };

        for record in &records {
            let raw_id = required_attr(record, RECORD, "id")?;
            let id = raw_id.trim().parse::<u32>().map(GlyphId::new).map_err(|_| {
                ModelError::InvalidAttribute {
                    element: RECORD,
                    attribute: "id",
                    value: raw_id.to_string(),
                }
            })?;
            let name = GlyphName::new(required_attr(record, RECORD, "name")?);
            order.insert(name, id);
        }

        Ok(order)
    }

    pub fn to_element(&self) -> Element {
        self.shell.assemble(self.ids.iter().map(|(name, id)| {
            Element::new(RECORD)
                .with_attr("id", id.to_u32().to_string())
                .with_attr("name", name.as_str())
        }))
    }

    fn insert(&mut self, name: GlyphName, id: GlyphId) {
        self.max_id = Some(self.max_id.map_or(id, |max| max.max(id)));
        self.ids.insert(name, id);
    }

    /// Append a glyph with the next free id (`max + 1`) and return that id
    ///
    /// An empty order hands out id 0.
    pub fn push_next(&mut self, name: GlyphName) -> GlyphId {
        let id = self.max_id.map_or(GlyphId::new(0), GlyphId::next);
        self.insert(name, id);
        id
    }

    /// Remove a glyph; the id counter never moves backwards
    pub fn remove(&mut self, name: &str) -> Option<GlyphId> {
        self.ids.shift_remove(name)
    }

    pub fn id(&self, name: &str) -> Option<GlyphId> {
        self.ids.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Highest id seen so far, including ids of removed glyphs
    pub fn max_id(&self) -> Option<GlyphId> {
        self.max_id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlyphName, GlyphId)> {
        self.ids.iter().map(|(name, id)| (name, *id))
    }
}
