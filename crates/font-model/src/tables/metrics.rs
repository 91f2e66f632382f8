//! hmtx / vmtx tables
//!
//! Both tables are lists of `mtx` records keyed by glyph name. The payload
//! (`width`/`lsb` or `height`/`tsb`) is copied as-is.

use indexmap::IndexMap;

use super::{TableShell, required_attr};
use crate::{Result, glyph_name::GlyphName, xml::Element};

pub const TAG_HMTX: &str = "hmtx";
pub const TAG_VMTX: &str = "vmtx";
const RECORD: &str = "mtx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsTable {
    shell: TableShell,
    entries: IndexMap<GlyphName, Element>,
}

impl MetricsTable {
    pub fn new(tag: &str) -> Self {
        Self { shell: TableShell::new(tag), entries: IndexMap::new() }
    }

    pub fn from_element(element: Element) -> Result<Self> {
        let (shell, records) = TableShell::split(element, |el| el.name == RECORD);
        let mut entries = IndexMap::with_capacity(records.len());
        for record in records {
            let name = GlyphName::new(required_attr(&record, RECORD, "name")?);
            entries.insert(name, record);
        }
        Ok(Self { shell, entries })
    }

    pub fn to_element(&self) -> Element {
        self.shell.assemble(self.entries.values().cloned())
    }

    /// `hmtx` or `vmtx`
    pub fn tag(&self) -> &str {
        self.shell.name()
    }

    /// Attribute value of a glyph's record, e.g. `width`
    pub fn value(&self, name: &str, key: &str) -> Option<&str> {
        self.entries.get(name)?.attr(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Copy `source_name`'s record from `source` into this table as `target_name`
    ///
    /// An existing record keeps its position and takes over the source's
    /// attributes. Returns `false` when the source has no such record.
    pub fn copy_from(
        &mut self,
        source: &MetricsTable,
        source_name: &str,
        target_name: &GlyphName,
    ) -> bool {
        let Some(record) = source.entries.get(source_name) else {
            return false;
        };
        let mut record = record.clone();
        record.set_attr("name", target_name.as_str());

        match self.entries.get_mut(target_name.as_str()) {
            Some(existing) => existing.attrs = record.attrs,
            None => {
                self.entries.insert(target_name.clone(), record);
            }
        }
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
