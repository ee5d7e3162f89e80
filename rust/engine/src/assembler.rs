//! Single-pass assembly of a hand's players and actions.
//!
//! Each line is folded into a [`HandState`]: the street tracker advances
//! first, then the line is offered to the action classifier and the player
//! extractor. The first action-fatal line aborts the whole hand.

use crate::action::classify;
use crate::errors::{LineError, ParseError};
use crate::player::{parse_player, Sighting};
use crate::records::{Action, Player};
use crate::street::Street;

/// Accumulated per-hand state, threaded by value through the line loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandState {
    pub street: Street,
    /// Order of the most recent action; zero before the first.
    pub order: u32,
    pub players: Vec<Player>,
    pub actions: Vec<Action>,
    pub hero: Option<String>,
}

impl HandState {
    pub fn advance(mut self, line: &str) -> Result<HandState, LineError> {
        self.street = self.street.advance(line);

        if let Some(parsed) = classify(line)? {
            self.order += 1;
            self.actions.push(Action {
                player_name: parsed.actor,
                order: self.order,
                street: self.street,
                kind: parsed.kind,
                amount: parsed.amount,
            });
        }

        if let Some((player, sighting)) = parse_player(line) {
            if sighting == Sighting::Dealt && self.hero.is_none() {
                self.hero = Some(player.username.clone());
            }
            // First sighting wins; the hero's cards reappear in the summary.
            if !self.players.iter().any(|p| p.username == player.username) {
                self.players.push(player);
            }
        }

        Ok(self)
    }
}

/// Scans every line of `text` exactly once.
pub fn assemble(text: &str) -> Result<HandState, ParseError> {
    text.lines().try_fold(HandState::default(), |state, line| {
        state
            .advance(line)
            .map_err(|cause| ParseError::action(line, cause))
    })
}
