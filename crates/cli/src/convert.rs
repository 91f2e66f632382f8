//! One fontremap run: decode, merge, encode.

use std::{
    io::{stdin, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use fontremap_codepoint_map::{CodepointMap, Preset};
use fontremap_font_model::FontModel;
use fontremap_font_remapper::{MergeOptions, Merger};
use log::{debug, warn};

use crate::{
    compiler::FontCompiler,
    inspect::inspect,
    io::{FontFile, remove_if_exists},
    prompt::confirm,
};

const RULE: &str = "--------------------------------------------------";

/// Where the codepoint map comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSource {
    Preset(Preset),
    File(PathBuf),
}

impl MappingSource {
    /// Name used in default output paths; `None` when nothing is remapped
    pub fn label(&self) -> Option<String> {
        match self {
            MappingSource::Preset(preset) if preset.is_none() => None,
            MappingSource::Preset(preset) => Some(preset.name().to_string()),
            MappingSource::File(path) => path.file_stem().map(|s| s.to_string_lossy().into_owned()),
        }
    }

    pub fn load(&self) -> Result<CodepointMap> {
        match self {
            MappingSource::Preset(preset) => Ok(preset.codepoint_map()),
            MappingSource::File(path) => CodepointMap::from_file(path)
                .with_context(|| format!("Failed to load mapping file: {}", path.display())),
        }
    }
}

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: FontFile,
    pub source: FontFile,
    pub output: FontFile,
    pub mapping: MappingSource,
    pub options: MergeOptions,
    pub keep_ttx: bool,
    pub assume_yes: bool,
}

impl Conversion {
    fn is_same_source(&self) -> bool {
        self.input == self.source
    }
}

/// Intermediate TTX files, removed on drop unless kept
#[derive(Debug, Default)]
struct Scratch {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl Scratch {
    fn track(&mut self, path: PathBuf) -> PathBuf {
        self.paths.push(path.clone());
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        for path in &self.paths {
            if let Err(e) = remove_if_exists(path) {
                warn!("{e:#}");
            }
        }
    }
}

/// Run a conversion, asking on stdin before risky merges
pub fn convert(conversion: &Conversion, compiler: &impl FontCompiler) -> Result<()> {
    convert_with(conversion, compiler, |question| {
        confirm(question, &mut stdin().lock(), &mut stdout())
    })
}

/// Run a conversion with a custom confirmation callback
pub fn convert_with(
    conversion: &Conversion,
    compiler: &impl FontCompiler,
    ask: impl FnOnce(&str) -> Result<bool>,
) -> Result<()> {
    println!("{RULE}");
    if conversion.is_same_source() {
        println!("Single font conversion mode: {}", conversion.input.path().display());
    } else {
        println!(
            "Merging glyphs from {} to {}",
            conversion.source.path().display(),
            conversion.input.path().display()
        );
    }

    let map = conversion.mapping.load()?;
    debug!("Codepoint map has {} pairs", map.len());

    conversion.output.ensure_parent_dir()?;
    let mut scratch = Scratch { paths: Vec::new(), keep: conversion.keep_ttx };

    let (base_ttx, source_ttx) = if conversion.is_same_source() {
        let ttx = prepare_ttx(
            &conversion.input,
            &conversion.output,
            ".base.ttx",
            compiler,
            &mut scratch,
        )?;
        (ttx.clone(), ttx)
    } else {
        let base_scratch =
            scratch_path(&conversion.input, &conversion.output, ".base.ttx", &mut scratch);
        let source_scratch =
            scratch_path(&conversion.source, &conversion.output, ".source.ttx", &mut scratch);
        let (base, source) = rayon::join(
            || decode(&conversion.input, base_scratch.as_deref(), compiler),
            || decode(&conversion.source, source_scratch.as_deref(), compiler),
        );
        (base?, source?)
    };

    let (mut base, source) = if base_ttx == source_ttx {
        let base = load(&base_ttx)?;
        let source = base.clone();
        (base, source)
    } else {
        let (base, source) = rayon::join(|| load(&base_ttx), || load(&source_ttx));
        (base?, source?)
    };

    if !map.is_empty()
        && !conversion.options.restricts_cmap()
        && let Some(cmap) = base.cmap()
    {
        let limited = cmap.limited_range_formats();
        if !limited.is_empty() {
            let formats: Vec<_> = limited.iter().map(|f| f.to_u16().to_string()).collect();
            warn!(
                "Font contains cmap format(s) {} which only support a limited character range; \
                 compiling the output may fail. Use --cmap 4,12 to avoid this.",
                formats.join(", ")
            );
            if !conversion.assume_yes && !ask("Continue anyway?")? {
                bail!("Aborted");
            }
        }
    }

    println!("{RULE}");
    println!("Merging font with {} codepoint pairs...", map.len());
    let report = Merger::new(conversion.options.clone()).merge(&mut base, &source, &map);
    println!("  {report}");

    println!("{RULE}");
    let output = conversion.output.path();
    if conversion.output.is_ttx() {
        base.write_ttx_file(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    } else {
        let merged_ttx = scratch.track(conversion.output.sibling(".merged.ttx"));
        base.write_ttx_file(&merged_ttx)
            .with_context(|| format!("Failed to write {}", merged_ttx.display()))?;
        println!("Compiling {}...", output.display());
        compiler
            .encode(&merged_ttx, output)
            .with_context(|| format!("Failed to compile {}", output.display()))?;
    }

    println!("{RULE}");
    println!("Finished with output file {}", output.display());
    Ok(())
}

/// Scratch TTX path for a binary font, or `None` when `font` is already TTX
fn scratch_path(
    font: &FontFile,
    output: &FontFile,
    suffix: &str,
    scratch: &mut Scratch,
) -> Option<PathBuf> {
    if font.is_ttx() {
        return None;
    }
    let stem = font.path().file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    Some(scratch.track(output.path().with_file_name(format!("{stem}{suffix}"))))
}

fn prepare_ttx(
    font: &FontFile,
    output: &FontFile,
    suffix: &str,
    compiler: &impl FontCompiler,
    scratch: &mut Scratch,
) -> Result<PathBuf> {
    let target = scratch_path(font, output, suffix, scratch);
    decode(font, target.as_deref(), compiler)
}

/// Decode `font` into `ttx`; TTX inputs are used as they are
fn decode(font: &FontFile, ttx: Option<&Path>, compiler: &impl FontCompiler) -> Result<PathBuf> {
    let Some(ttx) = ttx else {
        return Ok(font.path().to_path_buf());
    };
    let summary = inspect(font)?;
    println!("Parsing {} ({summary}) to ttx...", font.path().display());
    compiler
        .decode(font.path(), ttx)
        .with_context(|| format!("Failed to decode {}", font.path().display()))?;
    Ok(ttx.to_path_buf())
}

fn load(ttx: &Path) -> Result<FontModel> {
    FontModel::from_ttx_file(ttx).with_context(|| format!("Failed to load {}", ttx.display()))
}
