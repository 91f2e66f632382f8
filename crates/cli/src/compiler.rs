//! Binary font ⇄ TTX conversion through an external compiler.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use log::debug;

/// Decodes binary fonts to TTX and encodes them back.
///
/// `Sync` so the base and source fonts can be decoded in parallel.
pub trait FontCompiler: Sync {
    fn decode(&self, font: &Path, ttx: &Path) -> Result<()>;
    fn encode(&self, ttx: &Path, font: &Path) -> Result<()>;
}

/// fontTools' `ttx` command.
#[derive(Debug, Clone)]
pub struct TtxCompiler {
    program: PathBuf,
}

impl Default for TtxCompiler {
    fn default() -> Self {
        Self::new("ttx")
    }
}

impl TtxCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, input: &Path, output: &Path) -> Result<()> {
        debug!("{} -q -f -o {} {}", self.program.display(), output.display(), input.display());
        let result = Command::new(&self.program)
            .args(["-q", "-f", "-o"])
            .arg(output)
            .arg(input)
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            bail!(
                "{} failed on {} ({}): {}",
                self.program.display(),
                input.display(),
                result.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}

impl FontCompiler for TtxCompiler {
    fn decode(&self, font: &Path, ttx: &Path) -> Result<()> {
        self.run(font, ttx)
    }

    fn encode(&self, ttx: &Path, font: &Path) -> Result<()> {
        self.run(ttx, font)
    }
}
