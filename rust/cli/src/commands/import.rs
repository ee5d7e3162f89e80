//! Import command handler.
//!
//! Parses every session file under `--input` on a rayon pool sized by the
//! configuration and writes one JSON object per hand. Errors are reported per
//! file on stderr; they never stop the other files from being written.

use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::ensure_parent_dir;
use crate::source::DirectorySource;
use crate::ui;
use pokerhud_engine::batch::import_files;
use pokerhud_engine::Hand;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Handle the import command.
///
/// Hands go to `output` when given, otherwise to `out`. The closing summary
/// (`files`, `hands`, `errors`) goes to `out` only when hands do not, so
/// stdout is always valid JSON Lines.
///
/// # Errors
///
/// Returns `CliError::Config` for invalid configuration,
/// `CliError::InvalidInput` when the input cannot be listed, and
/// `CliError::Engine` when any hand or file failed to parse. In the last case
/// every parsed hand has already been written.
pub fn handle_import_command(
    input: &str,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;

    let source = DirectorySource::scan(Path::new(input), &cfg)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
    if source.is_empty() {
        ui::display_warning(
            err,
            &format!(
                "No files matching {:?} found in {}",
                cfg.extensions, input
            ),
        )?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.threads)
        .build()
        .map_err(|e| CliError::Config(format!("Failed to build thread pool: {}", e)))?;
    let per_file = pool
        .install(|| import_files(&source))
        .map_err(|e| CliError::InvalidInput(format!("Failed to list {}: {}", input, e)))?;

    let mut hands = 0usize;
    let mut errors = 0usize;
    let mut failed_files = 0usize;

    match output {
        Some(path) => {
            let path = Path::new(path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            let mut writer = BufWriter::new(std::fs::File::create(path)?);
            for (_, import) in &per_file {
                write_hands(&mut writer, &import.hands)?;
            }
            writer.flush()?;
        }
        None => {
            for (_, import) in &per_file {
                write_hands(out, &import.hands)?;
            }
        }
    }

    for (name, import) in &per_file {
        hands += import.hands.len();
        errors += import.errors.len();
        if !import.is_clean() {
            failed_files += 1;
        }
        for e in &import.errors {
            let item = BatchValidationError {
                item_context: name.as_str(),
                message: e.to_string(),
            };
            ui::write_error(err, &item.to_string())?;
        }
    }

    let summary = serde_json::json!({
        "files": per_file.len(),
        "hands": hands,
        "errors": errors,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize summary: {}", e)))?;
    if output.is_some() {
        writeln!(out, "{}", json_output)?;
    } else {
        writeln!(err, "{}", json_output)?;
    }

    if errors == 0 {
        Ok(())
    } else {
        Err(CliError::Engine(format!(
            "{} error(s) in {} file(s)",
            errors, failed_files
        )))
    }
}

fn write_hands(w: &mut dyn Write, hands: &[Hand]) -> Result<(), CliError> {
    for hand in hands {
        let line = serde_json::to_string(hand)
            .map_err(|e| CliError::InvalidInput(format!("Failed to serialize hand: {}", e)))?;
        writeln!(w, "{}", line)?;
    }
    Ok(())
}
