//! Exit code constants for the CLI application.
//!
//! `import` returns `ERROR` when any hand or file failed, even though the
//! hands that did parse were still written.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;
