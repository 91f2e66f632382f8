use std::{io, result, string::FromUtf8Error};

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to parse TTX: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialized TTX is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("TTX document has no root element")]
    EmptyDocument,

    #[error("expected <ttFont> root element, found <{0}>")]
    NotTtx(String),

    #[error("unexpected closing tag </{0}>")]
    UnbalancedTag(String),

    #[error("element <{0}> is never closed")]
    UnclosedTag(String),

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: &'static str, attribute: &'static str },

    #[error("<{element}> has invalid {attribute} value '{value}'")]
    InvalidAttribute { element: &'static str, attribute: &'static str, value: String },
}

pub type Result<T> = result::Result<T, ModelError>;
