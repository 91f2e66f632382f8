//! Binary font sniffing with read-fonts.

use std::fmt::{self, Display, Formatter};

use anyhow::{Context, Result, bail};
use read_fonts::{FileRef, FontRef, TableProvider, types::Tag};

use crate::io::FontFile;

/// Outline format of a binary font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    TrueType,
    Cff,
    Cff2,
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::TrueType => f.write_str("TrueType"),
            Flavor::Cff => f.write_str("CFF"),
            Flavor::Cff2 => f.write_str("CFF2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSummary {
    pub flavor: Flavor,
    pub num_glyphs: u16,
}

impl Display for FontSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} outlines, {} glyphs", self.flavor, self.num_glyphs)
    }
}

/// Check that `data` is a single font the remapper can work on.
pub fn inspect_bytes(data: &[u8]) -> Result<FontSummary> {
    let font = match FileRef::new(data).context("Not a font file")? {
        FileRef::Font(font) => font,
        FileRef::Collection(collection) => {
            bail!(
                "Font collections are not supported ({} fonts); extract one font first",
                collection.len()
            )
        }
    };
    summarize(&font)
}

pub fn inspect(file: &FontFile) -> Result<FontSummary> {
    let data = file.read()?;
    inspect_bytes(&data).with_context(|| format!("Invalid font: {}", file.path().display()))
}

fn summarize(font: &FontRef) -> Result<FontSummary> {
    let flavor = if font.table_data(Tag::new(b"glyf")).is_some() {
        Flavor::TrueType
    } else if font.table_data(Tag::new(b"CFF ")).is_some() {
        Flavor::Cff
    } else if font.table_data(Tag::new(b"CFF2")).is_some() {
        Flavor::Cff2
    } else {
        bail!("Font has neither glyf nor CFF outlines");
    };
    let num_glyphs = font.maxp().context("Failed to read maxp table")?.num_glyphs();
    Ok(FontSummary { flavor, num_glyphs })
}
