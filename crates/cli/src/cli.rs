//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use fontremap_codepoint_map::Preset;
use fontremap_font_remapper::{EmptyGlyphPolicy, MergeOptions};

use crate::{
    compiler::TtxCompiler,
    convert::{Conversion, MappingSource, convert},
    io::FontFile,
};

#[derive(Parser, Debug)]
#[command(name = "fontremap", version)]
#[command(about = "Remap codepoints to glyphs of another font (Simplified ⇄ Traditional Chinese)")]
pub struct Cli {
    /// Font to modify (.ttf, .otf or .ttx)
    pub input: PathBuf,

    /// Font to read glyphs from (default: same as input)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Built-in codepoint map: None, Hans, Hant, Hans2Hant or Hant2Hans
    ///
    /// The Chinese presets cover common one-to-one pairs only; use --map-file
    /// with an OpenCC table for full coverage.
    #[arg(short, long, default_value_t = Preset::None)]
    pub mapping: Preset,

    /// OpenCC-style mapping file (`src<TAB>dst`) used instead of a preset
    #[arg(long, value_name = "FILE", conflicts_with = "mapping")]
    pub map_file: Option<PathBuf>,

    /// Output font (default: <input>_<mapping>.<ext> or <input>.ttf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// cmap subtable formats to keep and update (default: all), e.g. 4,12
    #[arg(long, value_delimiter = ',', value_name = "FORMATS")]
    pub cmap: Vec<u16>,

    /// Replace glyphs that already exist in the input font
    #[arg(long)]
    pub overwrite: bool,

    /// Remove cmap entries pointing at empty glyphs
    #[arg(long)]
    pub optimize: bool,

    /// With --optimize, also remove the empty glyphs themselves
    #[arg(long, requires = "optimize")]
    pub drop_empty_glyphs: bool,

    /// ttx executable used to decode and encode binary fonts
    #[arg(long, value_name = "PATH", default_value = "ttx")]
    pub ttx: PathBuf,

    /// Keep intermediate .ttx files next to the output
    #[arg(long)]
    pub keep_ttx: bool,

    /// Do not ask for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let compiler = TtxCompiler::new(&self.ttx);
        convert(&self.conversion(), &compiler)
    }

    pub fn mapping_source(&self) -> MappingSource {
        match &self.map_file {
            Some(path) => MappingSource::File(path.clone()),
            None => MappingSource::Preset(self.mapping),
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        let policy =
            if self.drop_empty_glyphs { EmptyGlyphPolicy::Drop } else { EmptyGlyphPolicy::Keep };
        MergeOptions::new()
            .cmap_formats(self.cmap.iter().copied())
            .overwrite(self.overwrite)
            .optimize(self.optimize)
            .empty_glyph_policy(policy)
    }

    pub fn conversion(&self) -> Conversion {
        let mapping = self.mapping_source();
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output(&self.input, mapping.label().as_deref()));
        Conversion {
            input: FontFile::new(&self.input),
            source: FontFile::new(self.source.as_ref().unwrap_or(&self.input)),
            output: FontFile::new(output),
            mapping,
            options: self.merge_options(),
            keep_ttx: self.keep_ttx,
            assume_yes: self.yes,
        }
    }
}

/// Default output path for `input`
///
/// With a mapping: `<stem>_<label>.<ext>`. Without: `<stem>.ttf` for `.otf`
/// and `.ttx` inputs, otherwise the input's own extension. A missing
/// extension, or `.ttx`, becomes `.ttf` since the output is a binary font.
pub fn default_output(input: &Path, label: Option<&str>) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let ext = input.extension().map(|e| e.to_string_lossy());
    let ext = match ext.as_deref() {
        None => "ttf",
        Some(e) if e.eq_ignore_ascii_case("ttx") => "ttf",
        Some(e) if label.is_none() && e.eq_ignore_ascii_case("otf") => "ttf",
        Some(e) => e,
    };
    let name = match label {
        Some(label) => format!("{stem}_{label}.{ext}"),
        None => format!("{stem}.{ext}"),
    };
    input.with_file_name(name)
}
