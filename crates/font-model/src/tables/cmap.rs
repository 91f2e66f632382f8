//! cmap table
//!
//! Each `cmap_format_N` subtable is kept in file order with its `map`
//! records keyed by codepoint. Format 14 records are keyed by a
//! (`uv`, `uvs`) pair instead and are kept as raw elements.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{TableShell, required_attr};
use crate::{
    ModelError, Result,
    glyph_name::GlyphName,
    types::{CmapFormat, Codepoint},
    xml::Element,
};

pub const TAG: &str = "cmap";
const RECORD: &str = "map";

/// One codepoint → glyph record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmapEntry {
    code: Codepoint,
    /// The `code` attribute as written, so untouched records round-trip
    code_text: String,
    name: GlyphName,
}

impl CmapEntry {
    pub fn code(&self) -> Codepoint {
        self.code
    }

    pub fn name(&self) -> &GlyphName {
        &self.name
    }

    fn to_element(&self) -> Element {
        Element::new(RECORD)
            .with_attr("code", self.code_text.as_str())
            .with_attr("name", self.name.as_str())
    }
}

/// Outcome of [`CmapSubtable::upsert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Rebound,
    Unchanged,
    /// The subtable is not keyed by codepoint (format 14)
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmapSubtable {
    format: CmapFormat,
    shell: TableShell,
    entries: IndexMap<Codepoint, CmapEntry>,
    variations: Vec<Element>,
}

impl CmapSubtable {
    pub fn new(format: CmapFormat) -> Self {
        Self {
            format,
            shell: TableShell::new(format.tag()),
            entries: IndexMap::new(),
            variations: Vec::new(),
        }
    }

    pub fn from_element(element: Element) -> Result<Self> {
        let format = CmapFormat::from_tag(&element.name).ok_or_else(|| {
            ModelError::InvalidAttribute {
                element: "cmap",
                attribute: "subtable tag",
                value: element.name.clone(),
            }
        })?;
        let (shell, records) = TableShell::split(element, |el| el.name == RECORD);
        let mut subtable = Self {
            format,
            shell,
            entries: IndexMap::with_capacity(records.len()),
            variations: Vec::new(),
        };

        if !format.is_codepoint_keyed() {
            subtable.variations = records;
            return Ok(subtable);
        }

        for record in records {
            let code_text = required_attr(&record, RECORD, "code")?.to_string();
            let code = Codepoint::parse_hex(&code_text).map_err(|_| ModelError::InvalidAttribute {
                element: RECORD,
                attribute: "code",
                value: code_text.clone(),
            })?;
            let name = GlyphName::new(required_attr(&record, RECORD, "name")?);
            subtable.entries.insert(code, CmapEntry { code, code_text, name });
        }

        Ok(subtable)
    }

    pub fn to_element(&self) -> Element {
        if self.format.is_codepoint_keyed() {
            self.shell.assemble(self.entries.values().map(CmapEntry::to_element))
        } else {
            self.shell.assemble(self.variations.iter().cloned())
        }
    }

    pub fn format(&self) -> CmapFormat {
        self.format
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.shell.attr("platformID")
    }

    pub fn get(&self, code: Codepoint) -> Option<&GlyphName> {
        self.entries.get(&code).map(CmapEntry::name)
    }

    /// Point `code` at `name`, rebinding an existing record in place or
    /// appending a new `0x%04x` record
    pub fn upsert(&mut self, code: Codepoint, name: &GlyphName) -> Upsert {
        if !self.format.is_codepoint_keyed() {
            return Upsert::NotApplicable;
        }
        match self.entries.get_mut(&code) {
            Some(entry) if entry.name == *name => Upsert::Unchanged,
            Some(entry) => {
                entry.name = name.clone();
                Upsert::Rebound
            }
            None => {
                let entry = CmapEntry { code, code_text: code.to_cmap_code(), name: name.clone() };
                self.entries.insert(code, entry);
                Upsert::Inserted
            }
        }
    }

    /// Drop every record pointing at `name`; returns how many were removed
    pub fn remove_glyph(&mut self, name: &str) -> usize {
        let before = self.entries.len() + self.variations.len();
        self.entries.retain(|_, entry| entry.name != name);
        self.variations.retain(|record| record.attr("name") != Some(name));
        before - self.entries.len() - self.variations.len()
    }

    pub fn references(&self, name: &str) -> bool {
        self.entries.values().any(|entry| entry.name == name)
            || self.variations.iter().any(|record| record.attr("name") == Some(name))
    }

    /// Codepoint-keyed records in file order
    pub fn iter(&self) -> impl Iterator<Item = &CmapEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len() + self.variations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The `cmap` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    shell: TableShell,
    subtables: Vec<CmapSubtable>,
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self { shell: TableShell::new(TAG), subtables: Vec::new() }
    }
}

impl CharacterMap {
    pub fn from_element(element: Element) -> Result<Self> {
        let (shell, records) =
            TableShell::split(element, |el| CmapFormat::from_tag(&el.name).is_some());
        let subtables = records
            .into_iter()
            .map(CmapSubtable::from_element)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shell, subtables })
    }

    pub fn to_element(&self) -> Element {
        self.shell.assemble(self.subtables.iter().map(CmapSubtable::to_element))
    }

    pub fn subtables(&self) -> &[CmapSubtable] {
        &self.subtables
    }

    pub fn subtables_mut(&mut self) -> &mut [CmapSubtable] {
        &mut self.subtables
    }

    pub fn push(&mut self, subtable: CmapSubtable) {
        self.subtables.push(subtable);
    }

    /// Formats present, one per subtable in file order
    pub fn formats(&self) -> Vec<CmapFormat> {
        self.subtables.iter().map(CmapSubtable::format).collect()
    }

    /// Distinct formats that can only address a narrow code range
    pub fn limited_range_formats(&self) -> BTreeSet<CmapFormat> {
        self.subtables
            .iter()
            .map(CmapSubtable::format)
            .filter(|format| format.is_range_limited())
            .collect()
    }

    /// Remove every subtable whose format is not in `keep`
    ///
    /// The kept set is computed first and swapped in as a whole. Returns the
    /// formats of the removed subtables.
    pub fn retain_formats(&mut self, keep: &BTreeSet<CmapFormat>) -> Vec<CmapFormat> {
        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.subtables)
            .into_iter()
            .partition(|subtable| keep.contains(&subtable.format));
        self.subtables = kept;
        removed.iter().map(CmapSubtable::format).collect()
    }

    /// Drop every record pointing at `name` from every subtable
    pub fn remove_glyph_references(&mut self, name: &str) -> usize {
        self.subtables.iter_mut().map(|subtable| subtable.remove_glyph(name)).sum()
    }

    /// All codepoint-keyed records across subtables, in file order
    pub fn entries(&self) -> impl Iterator<Item = &CmapEntry> {
        self.subtables.iter().flat_map(CmapSubtable::iter)
    }
}
