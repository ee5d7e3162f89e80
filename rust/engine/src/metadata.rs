//! Hand-level metadata: identifier, start time and community boards.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

use crate::errors::ParseError;
use crate::lexical::between;

const HAND_MARKER: &str = "Hand #";
const ET_OPEN: &str = "[";
const ET_CLOSE: &str = " ET]";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RUN_TWICE_MARKER: &str = "Hand was run twice";
const BOARD_MARKER: &str = "Board [";
const FIRST_BOARD_MARKER: &str = "FIRST Board [";
const SECOND_BOARD_MARKER: &str = "SECOND Board [";

/// Eastern Standard Time.
const EST_OFFSET_SECS: i32 = -5 * 3600;
/// Eastern Daylight Time.
const EDT_OFFSET_SECS: i32 = -4 * 3600;

/// Hand-level fields extracted before any line scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub id: String,
    pub date: Option<DateTime<Local>>,
    pub community_cards: Vec<String>,
}

/// The text between `Hand #` and the following `:`.
pub fn hand_id(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once(HAND_MARKER)?;
    let (id, _) = rest.split_once(':')?;
    let id = id.trim();
    (!id.is_empty()).then_some(id)
}

/// The bracketed `[YYYY/MM/DD HH:MM:SS ET]` segment of the header line,
/// normalized to `YYYY-MM-DD HH:MM:SS`.
pub fn time_string(text: &str) -> Option<String> {
    let header = text
        .lines()
        .find(|line| line.contains(HAND_MARKER))
        .unwrap_or(text);
    let raw = between(header, ET_OPEN, ET_CLOSE)?;
    Some(raw.trim().replace('/', "-"))
}

/// Parses a normalized time string as Eastern time and converts it to local time.
pub fn parse_eastern_time(time: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(time, TIME_FORMAT).ok()?;
    let eastern = eastern_offset(&naive)?;
    let dt = naive.and_local_timezone(eastern).single()?;
    Some(dt.with_timezone(&Local))
}

/// US Eastern offset in effect at a civil time, from the post-2007 rule:
/// daylight time from 02:00 on the second Sunday of March to 02:00 on the
/// first Sunday of November. Computed, so no tz database is consulted.
///
/// The repeated hour in November resolves to daylight time and the skipped
/// hour in March is read as daylight time.
pub fn eastern_offset(civil: &NaiveDateTime) -> Option<FixedOffset> {
    let year = civil.year();
    let start = NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)?
        .and_hms_opt(2, 0, 0)?;
    let end = NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)?
        .and_hms_opt(2, 0, 0)?;
    let secs = if (start..end).contains(civil) {
        EDT_OFFSET_SECS
    } else {
        EST_OFFSET_SECS
    };
    FixedOffset::east_opt(secs)
}

/// Community boards: two for run-it-twice hands, one for an ordinary board, else none.
pub fn community_cards(text: &str) -> Vec<String> {
    if text.contains(RUN_TWICE_MARKER) {
        return match (
            between(text, FIRST_BOARD_MARKER, "]"),
            between(text, SECOND_BOARD_MARKER, "]"),
        ) {
            (Some(first), Some(second)) => vec![first.to_string(), second.to_string()],
            _ => {
                debug!("run-twice hand without both boards, treating as board-less");
                Vec::new()
            }
        };
    }
    between(text, BOARD_MARKER, "]")
        .map(|board| vec![board.to_string()])
        .unwrap_or_default()
}

pub fn parse_metadata(text: &str) -> Result<Metadata, ParseError> {
    let id = hand_id(text).ok_or_else(|| ParseError::no_hand_id(text))?;
    let date = match time_string(text) {
        Some(s) => {
            let parsed = parse_eastern_time(&s);
            if parsed.is_none() {
                debug!(hand_id = id, time = %s, "unparsable hand timestamp");
            }
            parsed
        }
        None => None,
    };
    Ok(Metadata {
        id: id.to_string(),
        date,
        community_cards: community_cards(text),
    })
}
