//! The font model: one TTX document with its remappable tables typed

use std::{
    fmt::{self, Display, Formatter},
    fs::{read_to_string, write},
    path::Path,
};

use log::debug;

use crate::{
    ModelError, Result,
    tables::{
        cff::{self, CffOutlines},
        cmap::{self, CharacterMap},
        glyf::{self, TrueTypeOutlines},
        glyph_order::{self, GlyphOrder},
        metrics::{self, MetricsTable},
    },
    xml::{Element, Node, parse_document, write_document},
};

const ROOT: &str = "ttFont";

/// How a font stores its outlines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineStorage {
    TrueType(TrueTypeOutlines),
    Cff(CffOutlines),
}

impl OutlineStorage {
    pub fn kind(&self) -> OutlineKind {
        match self {
            OutlineStorage::TrueType(_) => OutlineKind::TrueType,
            OutlineStorage::Cff(_) => OutlineKind::Cff,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            OutlineStorage::TrueType(glyf) => glyf.contains(name),
            OutlineStorage::Cff(cff) => cff.contains(name),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OutlineStorage::TrueType(glyf) => glyf.len(),
            OutlineStorage::Cff(cff) => cff.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_element(&self) -> Element {
        match self {
            OutlineStorage::TrueType(glyf) => glyf.to_element(),
            OutlineStorage::Cff(cff) => cff.to_element(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineKind {
    TrueType,
    Cff,
}

impl Display for OutlineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OutlineKind::TrueType => f.write_str("TrueType"),
            OutlineKind::Cff => f.write_str("CFF"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    GlyphOrder,
    Outlines,
    Cmap,
    Hmtx,
    Vmtx,
}

/// Disjoint mutable borrows of the typed tables
pub struct FontModelParts<'a> {
    pub glyph_order: Option<&'a mut GlyphOrder>,
    pub outlines: Option<&'a mut OutlineStorage>,
    pub cmap: Option<&'a mut CharacterMap>,
    pub hmtx: Option<&'a mut MetricsTable>,
    pub vmtx: Option<&'a mut MetricsTable>,
}

/// One font's TTX dump
///
/// `GlyphOrder`, `glyf`/`CFF`, `cmap`, `hmtx` and `vmtx` are parsed into
/// typed tables; every other table is kept as an untouched element and
/// written back in its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontModel {
    root: Element,
    slots: Vec<(usize, Section)>,
    glyph_order: Option<GlyphOrder>,
    outlines: Option<OutlineStorage>,
    cmap: Option<CharacterMap>,
    hmtx: Option<MetricsTable>,
    vmtx: Option<MetricsTable>,
}

impl FontModel {
    pub fn from_ttx_str(text: &str) -> Result<Self> {
        Self::from_root(parse_document(text)?)
    }

    pub fn from_ttx_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let model = Self::from_ttx_str(&read_to_string(path)?)?;
        debug!(
            "Loaded {} ({} outlines, {} glyphs, {} cmap subtables)",
            path.display(),
            model.outline_kind().map_or_else(|| "no".to_string(), |k| k.to_string()),
            model.glyph_count(),
            model.cmap.as_ref().map_or(0, |c| c.subtables().len()),
        );
        Ok(model)
    }

    pub fn from_root(root: Element) -> Result<Self> {
        if root.name != ROOT {
            return Err(ModelError::NotTtx(root.name));
        }

        let Element { name, attrs, children } = root;
        let mut model = Self {
            root: Element { name, attrs, children: Vec::with_capacity(children.len()) },
            slots: Vec::new(),
            glyph_order: None,
            outlines: None,
            cmap: None,
            hmtx: None,
            vmtx: None,
        };

        for child in children {
            let Node::Element(el) = child else {
                model.root.children.push(child);
                continue;
            };

            let section = match el.name.as_str() {
                glyph_order::TAG if model.glyph_order.is_none() => {
                    model.glyph_order = Some(GlyphOrder::from_element(el)?);
                    Section::GlyphOrder
                }
                glyf::TAG if model.outlines.is_none() => {
                    let glyf = TrueTypeOutlines::from_element(el)?;
                    model.outlines = Some(OutlineStorage::TrueType(glyf));
                    Section::Outlines
                }
                cff::TAG | cff::TAG_CFF2 if model.outlines.is_none() => {
                    model.outlines = Some(OutlineStorage::Cff(CffOutlines::from_element(el)));
                    Section::Outlines
                }
                cmap::TAG if model.cmap.is_none() => {
                    model.cmap = Some(CharacterMap::from_element(el)?);
                    Section::Cmap
                }
                metrics::TAG_HMTX if model.hmtx.is_none() => {
                    model.hmtx = Some(MetricsTable::from_element(el)?);
                    Section::Hmtx
                }
                metrics::TAG_VMTX if model.vmtx.is_none() => {
                    model.vmtx = Some(MetricsTable::from_element(el)?);
                    Section::Vmtx
                }
                _ => {
                    model.root.children.push(Node::Element(el));
                    continue;
                }
            };

            model.slots.push((model.root.children.len(), section));
            model.root.children.push(Node::Element(Element::default()));
        }

        Ok(model)
    }

    /// Rebuild the full document tree
    pub fn to_root(&self) -> Element {
        let mut root = self.root.clone();
        for (idx, section) in &self.slots {
            let element = match section {
                Section::GlyphOrder => self.glyph_order.as_ref().map(GlyphOrder::to_element),
                Section::Outlines => self.outlines.as_ref().map(OutlineStorage::to_element),
                Section::Cmap => self.cmap.as_ref().map(CharacterMap::to_element),
                Section::Hmtx => self.hmtx.as_ref().map(MetricsTable::to_element),
                Section::Vmtx => self.vmtx.as_ref().map(MetricsTable::to_element),
            };
            if let Some(element) = element {
                root.children[*idx] = Node::Element(element);
            }
        }
        root
    }

    pub fn to_ttx_string(&self) -> Result<String> {
        write_document(&self.to_root())
    }

    pub fn write_ttx_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write(path, self.to_ttx_string()?)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    pub fn outline_kind(&self) -> Option<OutlineKind> {
        self.outlines.as_ref().map(OutlineStorage::kind)
    }

    /// Number of glyph records in the outline table
    pub fn glyph_count(&self) -> usize {
        self.outlines.as_ref().map_or(0, OutlineStorage::len)
    }

    /// Tags of every top-level table, in document order
    pub fn table_tags(&self) -> Vec<String> {
        self.to_root().child_elements().map(|el| el.name.clone()).collect()
    }

    pub fn glyph_order(&self) -> Option<&GlyphOrder> {
        self.glyph_order.as_ref()
    }

    pub fn outlines(&self) -> Option<&OutlineStorage> {
        self.outlines.as_ref()
    }

    pub fn truetype_outlines(&self) -> Option<&TrueTypeOutlines> {
        match self.outlines.as_ref()? {
            OutlineStorage::TrueType(glyf) => Some(glyf),
            OutlineStorage::Cff(_) => None,
        }
    }

    pub fn cmap(&self) -> Option<&CharacterMap> {
        self.cmap.as_ref()
    }

    pub fn cmap_mut(&mut self) -> Option<&mut CharacterMap> {
        self.cmap.as_mut()
    }

    pub fn hmtx(&self) -> Option<&MetricsTable> {
        self.hmtx.as_ref()
    }

    pub fn vmtx(&self) -> Option<&MetricsTable> {
        self.vmtx.as_ref()
    }

    /// Borrow every typed table mutably at once
    pub fn parts_mut(&mut self) -> FontModelParts<'_> {
        FontModelParts {
            glyph_order: self.glyph_order.as_mut(),
            outlines: self.outlines.as_mut(),
            cmap: self.cmap.as_mut(),
            hmtx: self.hmtx.as_mut(),
            vmtx: self.vmtx.as_mut(),
        }
    }
}
