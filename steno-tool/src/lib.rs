use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod encode;
pub mod keycodes;
pub mod simulate;

/// Text given on the command line, or the contents of `file`.
pub fn read_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text.to_owned()),
        (None, Some(file)) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read \"{}\"", file.display())),
        (Some(_), Some(_)) => Err(anyhow::anyhow!("Give either text or a file, not both")),
        (None, None) => Err(anyhow::anyhow!("No text supplied")),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
