//! Splitting a session log into hands and parsing each one in isolation.

use tracing::{debug, warn};

use crate::assembler::assemble;
use crate::errors::ParseError;
use crate::metadata::parse_metadata;
use crate::records::Hand;
use crate::summary::parse_summary;

/// Separator between consecutive hands in a session log.
pub const HAND_SEPARATOR: &str = "\n\n\n";

const UTF8_BOM: &str = "\u{feff}";

/// Hands parsed from one or more sessions, with the errors of the hands that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandImport {
    pub hands: Vec<Hand>,
    pub errors: Vec<ParseError>,
}

impl HandImport {
    pub fn from_error(err: ParseError) -> Self {
        Self {
            hands: Vec::new(),
            errors: vec![err],
        }
    }

    pub fn merge(&mut self, other: HandImport) {
        self.hands.extend(other.hands);
        self.errors.extend(other.errors);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<HandImport> for HandImport {
    fn from_iter<I: IntoIterator<Item = HandImport>>(iter: I) -> Self {
        iter.into_iter().fold(HandImport::default(), |mut acc, next| {
            acc.merge(next);
            acc
        })
    }
}

/// Parses a single hand block. Metadata is checked before any line is scanned.
pub fn parse_hand(block: &str) -> Result<Hand, ParseError> {
    let meta = parse_metadata(block)?;
    let state = assemble(block)?;
    debug!(
        hand_id = %meta.id,
        actions = state.actions.len(),
        players = state.players.len(),
        "parsed hand"
    );
    Ok(Hand {
        id: meta.id,
        date: meta.date,
        players: state.players,
        actions: state.actions,
        community_cards: meta.community_cards,
        hero: state.hero,
        summary: parse_summary(block),
    })
}

/// Parses every hand in a session; a malformed hand never stops the rest.
pub fn parse_session(text: &str) -> HandImport {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let text = text.replace("\r\n", "\n");

    let mut import = HandImport::default();
    for block in text.split(HAND_SEPARATOR) {
        match parse_hand(block) {
            Ok(hand) => import.hands.push(hand),
            Err(e) => {
                warn!(error = %e, "skipping hand");
                import.errors.push(e);
            }
        }
    }
    import
}

/// Parses raw session bytes; invalid UTF-8 sequences are replaced, not rejected.
pub fn parse_session_bytes(bytes: &[u8]) -> HandImport {
    parse_session(&String::from_utf8_lossy(bytes))
}
