//! Cell formatting helpers.

use chrono::DateTime;

const EMPTY: &str = "-";

pub fn check(value: bool) -> String {
    if value { "✓" } else { "✗" }.to_string()
}

/// Unix seconds as `YYYY-MM-DD HH:MM:SS` UTC; `0` means unset.
pub fn timestamp(secs: i64) -> String {
    if secs == 0 {
        return EMPTY.to_string();
    }
    DateTime::from_timestamp(secs, 0).map_or_else(
        || secs.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

pub fn text(value: &str) -> String {
    if value.is_empty() {
        EMPTY.to_string()
    } else {
        value.to_string()
    }
}

pub fn opt_text(value: Option<&str>) -> String {
    text(value.unwrap_or_default())
}

pub fn ids(values: &[u64]) -> String {
    if values.is_empty() {
        return EMPTY.to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans() {
        assert_eq!(check(true), "✓");
        assert_eq!(check(false), "✗");
    }

    #[test]
    fn timestamps_are_utc() {
        assert_eq!(timestamp(0), "-");
        assert_eq!(timestamp(1_705_314_600), "2024-01-15 10:30:00");
    }

    #[test]
    fn empty_text_is_dash() {
        assert_eq!(text(""), "-");
        assert_eq!(opt_text(None), "-");
        assert_eq!(opt_text(Some("note")), "note");
    }

    #[test]
    fn id_lists() {
        assert_eq!(ids(&[]), "-");
        assert_eq!(ids(&[1, 2]), "1, 2");
    }
}
