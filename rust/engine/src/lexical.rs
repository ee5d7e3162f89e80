//! Delimiter-bounded substring helpers shared by every line parser.

/// Returns the text strictly between the first `start` and the first `end` after it.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(start)?;
    let (inner, _) = rest.split_once(end)?;
    Some(inner)
}

/// Like [`between`], but hands back `text` unchanged when either marker is missing.
///
/// Callers must re-validate the result; prefer [`between`] when absence matters.
pub fn substring_between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    between(text, start, end).unwrap_or(text)
}

/// Truncates to `max_len` characters, the last three of which become `...`.
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.max(3) - 3;
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}

/// The run of digits, decimal points and thousands separators at the start of `text`.
pub fn leading_amount(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_finds_first_pair() {
        assert_eq!(
            between("Board [Qc As 3d 2h] Board [Kd]", "Board [", "]"),
            Some("Qc As 3d 2h")
        );
        assert_eq!(between("Hand #123: Hold'em", "#", ":"), Some("123"));
    }

    #[test]
    fn between_requires_end_after_start() {
        assert_eq!(between("] then [", "[", "]"), None);
        assert_eq!(between("no markers here", "[", "]"), None);
    }

    #[test]
    fn substring_between_falls_back_to_input() {
        let text = "Dealt to KavarzE";
        assert_eq!(substring_between(text, "[", "]"), text);
        assert_eq!(substring_between("Dealt to KavarzE [Ad Ac]", "[", "]"), "Ad Ac");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("short", 100), "short");
        assert_eq!(truncate_with_ellipsis("exact", 5), "exact");
    }

    #[test]
    fn truncate_counts_unicode_scalars() {
        assert_eq!(truncate_with_ellipsis("ñandú ñandú", 8), "ñandú...");
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "...");
    }

    #[test]
    fn leading_amount_stops_at_text() {
        assert_eq!(leading_amount("0.10 and is all-in"), "0.10");
        assert_eq!(leading_amount("1,250.50"), "1,250.50");
        assert_eq!(leading_amount(" unparseable"), "");
    }
}
