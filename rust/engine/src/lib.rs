//! # pokerhud-engine: Hand History Parsing Core
//!
//! Turns raw PokerStars hand-history logs into structured [`Hand`] records:
//! players, the ordered betting actions and the community boards. Parsing is
//! best-effort per batch; every hand that cannot be parsed is reported as a
//! [`ParseError`] next to the hands that could.
//!
//! ## Core Modules
//!
//! - [`lexical`] - Delimiter-bounded substring helpers
//! - [`action`] - Action line classification (posts, folds, checks, bets, calls, raises)
//! - [`street`] - Street tracking from section headers
//! - [`player`] - Player and showdown line extraction
//! - [`metadata`] - Hand ID, Eastern-time timestamp and community boards
//! - [`summary`] - Pot and rake from the summary section
//! - [`assembler`] - Per-line fold that builds a hand's players and actions
//! - [`session`] - Splitting a session log into hands
//! - [`batch`] - Concurrent import of many session sources
//! - [`records`] - `Hand`, `Player` and `Action` records
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhud_engine::session::parse_session;
//!
//! let log = "PokerStars Hand #123: Hold'em No Limit ($0.02/$0.05)\n\
//!            Dealt to KavarzE [Ad Ac]\n\
//!            KavarzE: raises $0.08 to $0.13";
//! let import = parse_session(log);
//! assert_eq!(import.hands.len(), 1);
//! assert_eq!(import.hands[0].actions[0].amount, 0.08);
//! ```
//!
//! ## Importing Many Files
//!
//! ```rust
//! use pokerhud_engine::batch::{import_source, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with_file("zoom.txt", "PokerStars Hand #1: x\nKavarzE: folds")
//!     .with_file("broken.txt", "not a hand");
//! let import = import_source(&source);
//! assert_eq!(import.hands.len(), 1);
//! assert_eq!(import.errors.len(), 1);
//! ```

pub mod action;
pub mod assembler;
pub mod batch;
pub mod errors;
pub mod lexical;
pub mod metadata;
pub mod player;
pub mod records;
pub mod session;
pub mod street;
pub mod summary;

pub use errors::{ErrorKind, LineError, ParseError};
pub use records::{Action, ActionKind, Hand, Player, PotSummary};
pub use session::HandImport;
pub use street::Street;
