//! Filesystem-backed session source.
//!
//! A directory is scanned once when the source is built; the engine then asks
//! for each listed name from its worker threads.

use std::io;
use std::path::{Path, PathBuf};

use pokerhud_engine::batch::SessionSource;
use tracing::{debug, warn};

use crate::config::Config;
use crate::io_utils::read_bytes_auto;

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    names: Vec<String>,
}

impl DirectorySource {
    /// Lists session files under `input`.
    ///
    /// A plain file path yields a source with exactly that file, whatever its
    /// extension. A directory yields every file whose name ends in one of the
    /// configured extensions (optionally followed by `.zst`), sorted by
    /// relative path.
    pub fn scan(input: &Path, cfg: &Config) -> io::Result<Self> {
        if !input.is_dir() {
            let meta = std::fs::metadata(input)?;
            if !meta.is_file() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not a file", input.display()),
                ));
            }
            let root = input.parent().unwrap_or(Path::new("")).to_path_buf();
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty file name"))?;
            return Ok(Self {
                root,
                names: vec![name],
            });
        }

        let mut names = Vec::new();
        let mut stack = vec![input.to_path_buf()];
        while let Some(dir) = stack.pop() {
            let rd = match std::fs::read_dir(&dir) {
                Ok(v) => v,
                // The root must be listable; nested failures only skip that branch.
                Err(e) if dir == input => return Err(e),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                    continue;
                }
            };
            for entry in rd.filter_map(Result::ok) {
                let path = entry.path();
                if path.is_dir() {
                    if cfg.recursive {
                        stack.push(path);
                    }
                } else if let Some(fname) = path.file_name().and_then(|f| f.to_str())
                    && has_session_extension(fname, &cfg.extensions)
                    && let Ok(rel) = path.strip_prefix(input)
                {
                    names.push(rel.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        debug!(root = %input.display(), files = names.len(), "scanned session directory");

        Ok(Self {
            root: input.to_path_buf(),
            names,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl SessionSource for DirectorySource {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(self.names.clone())
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        read_bytes_auto(&self.root.join(name))
    }
}

fn has_session_extension(fname: &str, extensions: &[String]) -> bool {
    let base = fname.strip_suffix(".zst").unwrap_or(fname);
    extensions.iter().any(|ext| {
        base.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
    })
}
