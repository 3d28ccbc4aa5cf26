// refilter/src/commands/filter.rs
//! Filter command implementation: one pass over stdin or a file.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};

use refilter_core::RegexFilter;

use crate::cli::FilterCommand;

pub fn run(filter: &RegexFilter, cmd: &FilterCommand) -> Result<()> {
    let mut text = match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    let outcome = filter.filter_completion(&mut text);
    debug!(
        "Filter pass complete. Changed: {}, rules fired: {}",
        outcome.any_changed,
        outcome.applied.len()
    );

    match &cmd.output {
        Some(path) => fs::write(path, text.as_bytes())
            .with_context(|| format!("Failed to write output file {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
