use serde::{Deserialize, Serialize};

const FLOP_MARKER: &str = "*** FLOP ***";
const TURN_MARKER: &str = "*** TURN ***";
const RIVER_MARKER: &str = "*** RIVER ***";

/// Represents a betting street in Texas Hold'em poker.
/// Streets are ordered, so a hand's street can only move forward.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    #[default]
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    /// Street announced by a section header line, if any.
    pub fn from_marker(line: &str) -> Option<Street> {
        if line.contains(FLOP_MARKER) {
            Some(Street::Flop)
        } else if line.contains(TURN_MARKER) {
            Some(Street::Turn)
        } else if line.contains(RIVER_MARKER) {
            Some(Street::River)
        } else {
            None
        }
    }

    /// Street in effect after `line`; never moves backwards.
    pub fn advance(self, line: &str) -> Street {
        match Street::from_marker(line) {
            Some(next) => self.max(next),
            None => self,
        }
    }
}
