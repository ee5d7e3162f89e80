use tracing::debug;

use crate::action::parse_decimal;
use crate::errors::LineError;
use crate::lexical::leading_amount;
use crate::records::PotSummary;

pub const POT_MARKER: &str = "Total pot $";
pub const RAKE_MARKER: &str = "Rake $";

/// The amount immediately after `marker`.
pub fn amount_after(text: &str, marker: &str) -> Result<f64, LineError> {
    let (_, rest) = text.split_once(marker).ok_or(LineError::Currency)?;
    parse_decimal(leading_amount(rest))
}

/// Pot and rake from the summary section; `None` if either is missing or malformed.
pub fn parse_summary(text: &str) -> Option<PotSummary> {
    if !text.contains(POT_MARKER) {
        return None;
    }
    match pot_and_rake(text) {
        Ok(summary) => Some(summary),
        Err(e) => {
            debug!(error = %e, "ignoring malformed pot summary");
            None
        }
    }
}

fn pot_and_rake(text: &str) -> Result<PotSummary, LineError> {
    Ok(PotSummary {
        pot: amount_after(text, POT_MARKER)?,
        rake: amount_after(text, RAKE_MARKER)?,
    })
}
