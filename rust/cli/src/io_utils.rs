//! File I/O utilities for session imports.
//!
//! - Reading session files with automatic .zst decompression
//! - Ensuring parent directories exist before file writes
//!
//! ## Compressed File Support
//!
//! `read_bytes_auto` detects Zstandard files by extension. Archived session
//! exports are often stored as `*.txt.zst`.

use std::io;
use std::path::Path;

/// Decompression ceiling for a single session file.
const MAX_DECOMPRESSED: usize = 64 * 1024 * 1024;

/// Read a session file, decompressing it if the path ends with ".zst".
///
/// Bytes are returned undecoded; the engine decodes them lossily and strips
/// any UTF-8 BOM.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use pokerhud_cli::io_utils::read_bytes_auto;
///
/// let plain = read_bytes_auto(Path::new("hands/session.txt")).unwrap();
/// let archived = read_bytes_auto(Path::new("hands/2025-01.txt.zst")).unwrap();
/// ```
pub fn read_bytes_auto(path: &Path) -> io::Result<Vec<u8>> {
    let raw = std::fs::read(path)?;
    if is_zstd(path) {
        zstd::bulk::decompress(&raw, MAX_DECOMPRESSED)
    } else {
        Ok(raw)
    }
}

pub fn is_zstd(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use pokerhud_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("output/hands.jsonl");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}
