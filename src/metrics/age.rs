use chrono::{DateTime, FixedOffset, Utc};

/// Layout of git's `%ci` / `%(creatordate:iso)` timestamps.
const GIT_ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub fn parse_git_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw.trim(), GIT_ISO_FORMAT).ok()
}

/// Coarse label for an age given in whole days.
pub fn humanize_days(days: i64) -> String {
    match days {
        d if d < 1 => "today".to_string(),
        1 => "1 day ago".to_string(),
        2..=29 => format!("{days} days ago"),
        30..=59 => "1 month ago".to_string(),
        60..=364 => format!("{} months ago", days / 30),
        365..=729 => "1 year ago".to_string(),
        _ => format!("{} years ago", days / 365),
    }
}

pub fn humanize(then: &DateTime<FixedOffset>, now: &DateTime<Utc>) -> String {
    let days = now
        .signed_duration_since(then.with_timezone(&Utc))
        .num_days();
    humanize_days(days)
}

/// Parse-then-humanize; anything unparseable is `"unknown"`.
pub fn relative_age(raw: &str, now: &DateTime<Utc>) -> String {
    match parse_git_timestamp(raw) {
        Some(then) => humanize(&then, now),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn ago(days: i64) -> String {
        let then = (now() - Duration::days(days)).fixed_offset();
        humanize(&then, &now())
    }

    #[test]
    fn breakpoints() {
        assert_eq!(ago(0), "today");
        assert_eq!(ago(1), "1 day ago");
        assert_eq!(ago(2), "2 days ago");
        assert_eq!(ago(29), "29 days ago");
        assert_eq!(ago(30), "1 month ago");
        assert_eq!(ago(59), "1 month ago");
        assert_eq!(ago(60), "2 months ago");
        assert_eq!(ago(364), "12 months ago");
        assert_eq!(ago(365), "1 year ago");
        assert_eq!(ago(729), "1 year ago");
        assert_eq!(ago(730), "2 years ago");
        assert_eq!(ago(1100), "3 years ago");
    }

    #[test]
    fn future_timestamps_are_today() {
        assert_eq!(ago(-3), "today");
    }

    #[test]
    fn parses_git_iso_with_offset() {
        let raw = "2024-06-29 14:00:00 +0200";
        let expected = Utc.with_ymd_and_hms(2024, 6, 29, 12, 0, 0).unwrap();
        let parsed = parse_git_timestamp(raw).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), expected);
        assert_eq!(relative_age(raw, &now()), "1 day ago");
    }

    #[test]
    fn unparseable_is_unknown() {
        assert_eq!(relative_age("", &now()), "unknown");
        assert_eq!(relative_age("yesterday-ish", &now()), "unknown");
    }
}
