//! Typed views of the TTX tables the remapper edits

pub mod cff;
pub mod cmap;
pub mod glyf;
pub mod glyph_order;
pub mod metrics;

use crate::{
    ModelError, Result,
    xml::{Element, Node},
};

/// The parts of a table element that are not its typed records
///
/// Nodes before the first record (a `tableVersion`, an explanatory comment)
/// are written back before the records, everything else after them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TableShell {
    name: String,
    attrs: Vec<(String, String)>,
    leading: Vec<Node>,
    trailing: Vec<Node>,
}

impl TableShell {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Split an element into its shell and the children matching `is_record`
    pub(crate) fn split(
        element: Element,
        is_record: impl Fn(&Element) -> bool,
    ) -> (Self, Vec<Element>) {
        let Element { name, attrs, children } = element;
        let mut shell = Self { name, attrs, leading: Vec::new(), trailing: Vec::new() };
        let mut records = Vec::new();

        for child in children {
            match child {
                Node::Element(el) if is_record(&el) => records.push(el),
                other if records.is_empty() => shell.leading.push(other),
                other => shell.trailing.push(other),
            }
        }

        (shell, records)
    }

    /// Rebuild the element around a fresh set of records
    pub(crate) fn assemble(&self, records: impl IntoIterator<Item = Element>) -> Element {
        let mut children = self.leading.clone();
        children.extend(records.into_iter().map(Node::Element));
        children.extend(self.trailing.iter().cloned());
        Element { name: self.name.clone(), attrs: self.attrs.clone(), children }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Fetch a required attribute from a typed record
pub(crate) fn required_attr<'a>(
    el: &'a Element,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str> {
    el.attr(attribute).ok_or(ModelError::MissingAttribute { element, attribute })
}
