//! Shared fixtures for the CLI integration tests.
//!
//! Hand texts are the engine's real-world samples; `SessionDir` lays them out
//! on disk the way a client's hand-history folder looks.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const ZOOM_SESSION: &str = include_str!("../../../engine/tests/data/zoom_session.txt");
pub const CASH_SESSION: &str = include_str!("../../../engine/tests/data/cash_session.txt");
pub const BROKEN_SESSION: &str = include_str!("../../../engine/tests/data/broken_session.txt");
pub const RUN_IT_TWICE: &str = include_str!("../../../engine/tests/data/run_it_twice.txt");

pub const ENV_KEYS: [&str; 4] = [
    "POKERHUD_CONFIG",
    "POKERHUD_EXTENSIONS",
    "POKERHUD_THREADS",
    "POKERHUD_RECURSIVE",
];

/// Removes every `POKERHUD_*` variable. Callers must be `#[serial]`.
pub fn clear_env() {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub struct SessionDir {
    dir: tempfile::TempDir,
}

impl SessionDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn arg(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_zst(&self, rel: &str, contents: &str) -> PathBuf {
        let packed = zstd::bulk::compress(contents.as_bytes(), 3).expect("compress");
        self.write(rel, packed)
    }
}

pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(args: &[&str]) -> RunOutput {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["pokerhud"];
    argv.extend_from_slice(args);
    let code = pokerhud_cli::run(argv, &mut out, &mut err);
    RunOutput {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

/// Parses every stdout line as JSON.
pub fn json_lines(s: &str) -> Vec<serde_json::Value> {
    s.lines()
        .map(|l| serde_json::from_str(l).expect("JSON line"))
        .collect()
}

/// Extracts the pretty-printed summary object from the end of a stream.
pub fn summary(s: &str) -> serde_json::Value {
    let start = s.rfind("{\n").expect("summary object");
    let end = s.rfind('}').expect("summary end");
    serde_json::from_str(&s[start..=end]).expect("summary JSON")
}
