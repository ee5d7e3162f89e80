//! Action line classification.
//!
//! A line is an action when it contains one of the [`ActionKind`] verbs. The
//! actor is everything before the first `:`, and the amount follows the `$`
//! currency marker. For raises (`raises $0.08 to $0.13`) the recorded amount
//! is the increment, not the final size.

use crate::errors::LineError;
use crate::lexical::leading_amount;
use crate::records::ActionKind;

/// Currency marker preceding every monetary amount.
pub const DOLLAR: &str = "$";

/// An action extracted from a single line, before street and order are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAction {
    pub actor: String,
    pub kind: ActionKind,
    pub amount: f64,
}

/// First verb found in `line`, tested in [`ActionKind::PRIORITY`] order.
pub fn action_kind(line: &str) -> Option<ActionKind> {
    ActionKind::PRIORITY
        .into_iter()
        .find(|kind| line.contains(kind.verb()))
}

/// Text before the first `:`; `MissingActor` when the line has none.
pub fn actor(line: &str) -> Result<&str, LineError> {
    line.split_once(':')
        .map(|(name, _)| name)
        .ok_or(LineError::MissingActor)
}

/// Numeric run after the first `$`. Without a `$`, folds and checks are free
/// and every other kind is a `Currency` error.
pub fn amount(line: &str, kind: ActionKind) -> Result<f64, LineError> {
    let Some((_, after)) = line.split_once(DOLLAR) else {
        return if kind.is_free() {
            Ok(0.0)
        } else {
            Err(LineError::Currency)
        };
    };

    // For raises the run stops before " to $<total>", leaving the increment.
    parse_decimal(leading_amount(after.trim_start()))
}

pub(crate) fn parse_decimal(raw: &str) -> Result<f64, LineError> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| LineError::InvalidAmount {
            value: raw.to_string(),
        })
}

/// Classifies one line. `Ok(None)` means the line carries no action.
pub fn classify(line: &str) -> Result<Option<ParsedAction>, LineError> {
    let Some(kind) = action_kind(line) else {
        return Ok(None);
    };
    let actor = actor(line)?;
    let amount = amount(line, kind)?;
    Ok(Some(ParsedAction {
        actor: actor.to_string(),
        kind,
        amount,
    }))
}
