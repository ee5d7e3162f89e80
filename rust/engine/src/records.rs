use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::street::Street;

/// The kind of player action recorded on a hand-history line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Posts,
    Folds,
    Checks,
    Bets,
    Calls,
    Raises,
}

impl ActionKind {
    /// Classification priority: the first verb found in a line wins.
    pub const PRIORITY: [ActionKind; 6] = [
        ActionKind::Posts,
        ActionKind::Folds,
        ActionKind::Checks,
        ActionKind::Bets,
        ActionKind::Calls,
        ActionKind::Raises,
    ];

    /// The verb as it appears in the log.
    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Posts => "posts",
            ActionKind::Folds => "folds",
            ActionKind::Checks => "checks",
            ActionKind::Bets => "bets",
            ActionKind::Calls => "calls",
            ActionKind::Raises => "raises",
        }
    }

    /// Folds and checks carry no monetary amount.
    pub fn is_free(&self) -> bool {
        matches!(self, ActionKind::Folds | ActionKind::Checks)
    }
}

/// A player seen in a hand, with hole cards if they were ever revealed.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub username: String,
    /// Space separated cards, empty when never shown or mucked.
    pub cards: String,
}

/// A single betting decision.
///
/// `player_name` is the raw actor text; it is deliberately not linked to
/// [`Hand::players`], which are discovered from different lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub player_name: String,
    /// 1-based position within the hand.
    pub order: u32,
    pub street: Street,
    pub kind: ActionKind,
    /// Raise increment for raises, zero for folds and checks.
    pub amount: f64,
}

/// Pot and rake from the summary section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotSummary {
    pub pot: f64,
    pub rake: f64,
}

/// Complete record of one parsed hand.
/// Serialized to JSONL by the importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Identifier from the `Hand #...:` header
    pub id: String,
    /// Start time, `None` when the header carries no ET timestamp
    pub date: Option<DateTime<Local>>,
    pub players: Vec<Player>,
    /// Ordered by `order`
    pub actions: Vec<Action>,
    /// One entry per board; two for run-it-twice hands
    pub community_cards: Vec<String>,
    /// Username from the `Dealt to` line
    #[serde(default)]
    pub hero: Option<String>,
    #[serde(default)]
    pub summary: Option<PotSummary>,
}

impl Hand {
    pub fn player(&self, username: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.username == username)
    }

    pub fn hero(&self) -> Option<&Player> {
        self.hero.as_deref().and_then(|name| self.player(name))
    }

    pub fn is_run_twice(&self) -> bool {
        self.community_cards.len() == 2
    }
}
