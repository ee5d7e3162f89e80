use crate::lexical::between;
use crate::records::Player;

const DEALT_MARKER: &str = "Dealt to";
const SHOWED_MARKER: &str = "showed [";
const MUCKED_MARKER: &str = "mucked [";
const FOLDED_MARKER: &str = "folded";
const COLLECTED_MARKER: &str = "collected (";

/// Which kind of line revealed the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Sighting {
    /// Hero's hole cards
    Dealt,
    /// Cards shown at showdown
    Showed,
    /// Cards revealed without showdown
    Mucked,
    Folded,
    /// Pot winner in the summary
    Collected,
}

impl Sighting {
    /// Tested in declaration order; the first marker found wins.
    const ALL: [(Sighting, &'static str); 5] = [
        (Sighting::Dealt, DEALT_MARKER),
        (Sighting::Showed, SHOWED_MARKER),
        (Sighting::Mucked, MUCKED_MARKER),
        (Sighting::Folded, FOLDED_MARKER),
        (Sighting::Collected, COLLECTED_MARKER),
    ];

    /// Marker opening the card list, if this sighting reveals cards.
    fn card_prefix(&self) -> Option<&'static str> {
        match self {
            Sighting::Dealt => Some("["),
            Sighting::Showed => Some(SHOWED_MARKER),
            Sighting::Mucked => Some(MUCKED_MARKER),
            Sighting::Folded | Sighting::Collected => None,
        }
    }
}

/// Extracts player identity (and cards) from `Dealt to`, showdown and summary lines.
///
/// The username is the third whitespace-separated token, matching both
/// `Dealt to NAME [..]` and `Seat N: NAME ...`.
pub fn parse_player(line: &str) -> Option<(Player, Sighting)> {
    let (sighting, _) = Sighting::ALL
        .into_iter()
        .find(|(_, marker)| line.contains(marker))?;
    let username = line.split_whitespace().nth(2)?;
    let cards = sighting
        .card_prefix()
        .and_then(|prefix| between(line, prefix, "]"))
        .unwrap_or_default();
    Some((
        Player {
            username: username.to_string(),
            cards: cards.to_string(),
        },
        sighting,
    ))
}
