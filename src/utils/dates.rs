//! Parsing of user-typed days, times, months and spans.

use anyhow::{Context, Result};
use apptcal_core::date_range::parse_day;
use apptcal_core::grid::MonthGrid;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    lower_words(input)
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lower_words(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_lowercase)
}

/// Parse a calendar day: YYYY-MM-DD, or natural language ("tomorrow", "next fri").
/// Any time of day in the input is dropped.
pub fn parse_day_input(input: &str) -> Result<NaiveDate> {
    if let Ok(day) = parse_day(input) {
        return Ok(day);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse the end of a span: either a day, or a length like "3days" counted
/// inclusively from `start` ("1day" ends on the start day).
pub fn parse_end(input: &str, start: NaiveDate) -> Result<NaiveDate> {
    if let Ok(end) = try_apply_span_length(start, input) {
        return Ok(end);
    }

    // Strip "until"/"to" prefix and parse as a day
    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    parse_day_input(cleaned)
}

/// Apply a span length, failing with a readable message.
pub fn apply_span_length(start: NaiveDate, input: &str) -> Result<NaiveDate> {
    try_apply_span_length(start, input).with_context(|| format!("Could not parse duration: \"{}\"", input))
}

fn try_apply_span_length(start: NaiveDate, input: &str) -> Result<NaiveDate> {
    let std_dur = humantime::parse_duration(input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    let days = chrono_dur.num_days();
    if days < 1 {
        anyhow::bail!("Appointments last at least one day");
    }

    start
        .checked_add_signed(Duration::days(days - 1))
        .context("Span ends past the last supported date")
}

/// Parse HH:MM (24h).
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\". Expected HH:MM", input))
}

/// Parse YYYY-MM into the grid for that month.
pub fn parse_month(input: &str) -> Result<MonthGrid> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse month: \"{}\". Expected YYYY-MM", input))?;

    Ok(MonthGrid::containing(first)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("Mon"), "monday");
        assert_eq!(expand_abbreviations("thurs"), "thursday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("  next   friday "), "next friday");
    }

    // --- parse_day_input ---

    #[test]
    fn parse_day_input_iso() {
        assert_eq!(parse_day_input("2026-10-19").unwrap(), ymd(2026, 10, 19));
    }

    #[test]
    fn parse_day_input_natural_language() {
        let parsed = parse_day_input("march 20").unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 20));
    }

    #[test]
    fn parse_day_input_invalid() {
        assert!(parse_day_input("not a date at all xyz").is_err());
    }

    // --- parse_end ---

    #[test]
    fn parse_end_span_length_is_inclusive() {
        let start = ymd(2026, 10, 19);
        assert_eq!(parse_end("1day", start).unwrap(), start);
        assert_eq!(parse_end("3days", start).unwrap(), ymd(2026, 10, 21));
        assert_eq!(parse_end("1week", start).unwrap(), ymd(2026, 10, 25));
    }

    #[test]
    fn parse_end_until_day() {
        let start = ymd(2026, 10, 19);
        assert_eq!(parse_end("until 2026-10-30", start).unwrap(), ymd(2026, 10, 30));
        assert_eq!(parse_end("2026-11-02", start).unwrap(), ymd(2026, 11, 2));
    }

    #[test]
    fn span_shorter_than_a_day_is_rejected() {
        assert!(apply_span_length(ymd(2026, 10, 19), "3h").is_err());
        assert!(apply_span_length(ymd(2026, 10, 19), "soon").is_err());
    }

    #[test]
    fn span_past_last_supported_date_is_rejected() {
        let start = ymd(2026, 10, 19);
        assert!(apply_span_length(start, "300000years").is_err());
    }

    // --- parse_time / parse_month ---

    #[test]
    fn parse_time_24h() {
        assert_eq!(parse_time("09:00").unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(parse_time("17:45").unwrap(), NaiveTime::from_hms_opt(17, 45, 0).unwrap());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("9am").is_err());
    }

    #[test]
    fn parse_month_year_month() {
        let grid = parse_month("2024-02").unwrap();
        assert_eq!((grid.year(), grid.month0()), (2024, 1));
        assert_eq!(grid.days_in_month(), 29);
        assert!(parse_month("2024-13").is_err());
    }
}
