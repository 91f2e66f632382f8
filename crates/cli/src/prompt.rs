//! Interactive y/N confirmation.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Ask `question` and read one answer; anything but `y`/`yes` declines.
pub fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{question} (y/N): ").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    input.read_line(&mut answer).context("Failed to read answer")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
