// src/domain/date.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Largest distance from the epoch, in milliseconds, that a date may lie.
/// chrono's own calendar range is narrower, so instants near this bound are
/// rejected as well.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// `%B` also accepts the three letter month abbreviation when parsing.
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y"];

/// A value that can be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Instant(DateTime<Utc>),
    Text(String),
}

impl DateInput {
    /// Resolve the input to a UTC instant.
    ///
    /// Text without an explicit offset is read as UTC. Date-only text
    /// (`YYYY`, `YYYY-MM`, `2024-1-5`, `2024/01/15`, `January 15, 2024`,
    /// `Jan 15 2024`) resolves to midnight UTC. Six digit signed years
    /// (`+002024-01-15T00:00:00Z`) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDate`] for unrecognised text and for
    /// instants outside the supported range.
    pub fn to_utc(&self) -> DomainResult<DateTime<Utc>> {
        match self {
            Self::Timestamp(millis) => from_millis(*millis),
            Self::Instant(instant) => Ok(*instant),
            Self::Text(text) => parse_text(text),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timestamp(millis) => write!(f, "{millis}"),
            Self::Instant(instant) => f.write_str(&instant.to_rfc3339()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Instant(value.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<&DateInput> for DateInput {
    fn from(value: &DateInput) -> Self {
        value.clone()
    }
}

fn invalid(input: impl fmt::Display) -> DomainError {
    DomainError::InvalidDate(input.to_string())
}

fn check_range(millis: i64) -> DomainResult<()> {
    if millis.unsigned_abs() > MAX_TIMESTAMP_MILLIS.unsigned_abs() {
        return Err(invalid(format!("{millis}ms is out of range")));
    }
    Ok(())
}

fn from_millis(millis: i64) -> DomainResult<DateTime<Utc>> {
    check_range(millis)?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| invalid(format!("{millis}ms is out of range")))
}

fn parse_text(raw: &str) -> DomainResult<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(invalid("empty date string"));
    }

    let parsed = parse_expanded_year(text)
        .or_else(|| parse_instant(text))
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| invalid(format!("unrecognised date `{text}`")))?;

    check_range(parsed.timestamp_millis())?;
    Ok(parsed)
}

fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| parse_naive_date_time(text).map(|naive| naive.and_utc().fixed_offset()))
        .or_else(|| {
            parse_date_only(text)
                .or_else(|| parse_naive_date(text))
                .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        })
        .or_else(|| DateTime::parse_from_rfc2822(text).ok())
}

// `+YYYYYY-MM-DD…` / `-YYYYYY-MM-DD…`. The tail is parsed against a leap
// base year so 29 February survives until the real year is applied.
fn parse_expanded_year(text: &str) -> Option<DateTime<FixedOffset>> {
    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = text.get(1..7)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let tail = &text[7..];
    if !tail.starts_with('-') {
        return None;
    }
    let year = sign * digits.parse::<i32>().ok()?;
    if sign < 0 && year == 0 {
        return None;
    }

    parse_instant(&format!("2000{tail}"))?.with_year(year)
}

fn parse_naive_date_time(text: &str) -> Option<NaiveDateTime> {
    if !has_full_year_prefix(text) {
        return None;
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

fn parse_naive_date(text: &str) -> Option<NaiveDate> {
    if !has_full_year_prefix(text) {
        return None;
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

// Text that opens with digits must open with a four digit year; chrono's `%Y`
// would otherwise read `24-01-15` as year 24 or `+2024` as a signed year.
fn has_full_year_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b'+' | b'-') => false,
        Some(b) if b.is_ascii_digit() => {
            bytes.len() > 4
                && bytes[..4].iter().all(u8::is_ascii_digit)
                && !bytes[4].is_ascii_digit()
        }
        _ => true,
    }
}

fn parse_date_only(text: &str) -> Option<NaiveDate> {
    let mut parts = text.splitn(3, '-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = match parts.next() {
        Some(part) => parse_fixed_digits(part, 2)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(part) => parse_fixed_digits(part, 2)?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_fixed_digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// en-US calendar date styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `1/15/2024`
    #[default]
    Numeric,
    /// `Jan 15, 2024`
    Medium,
    /// `January 15, 2024`
    Long,
    /// `Monday, January 15, 2024`
    Full,
}

impl DateStyle {
    /// Render `instant` as an en-US calendar date in UTC.
    #[must_use]
    pub fn render(self, instant: &DateTime<Utc>) -> String {
        let (month, day, year) = (instant.month(), instant.day(), instant.year());
        match self {
            Self::Numeric => format!("{month}/{day}/{year}"),
            Self::Medium => format!("{} {day}, {year}", instant.format("%b")),
            Self::Long => format!("{} {day}, {year}", instant.format("%B")),
            Self::Full => format!("{} {day}, {year}", instant.format("%A, %B")),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "short" => Ok(Self::Numeric),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "full" => Ok(Self::Full),
            other => Err(DomainError::Validation(format!(
                "unknown date style `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn ymd(input: impl Into<DateInput>) -> (i32, u32, u32) {
        let dt = input.into().to_utc().expect("valid date");
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn rfc3339_with_offset_is_converted_to_utc() {
        let dt = DateInput::from("2024-01-15T23:30:00-05:00").to_utc().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 16));
        assert_eq!(dt.hour(), 4);
    }

    #[test]
    fn date_only_forms_resolve_to_midnight_utc() {
        assert_eq!(ymd("2024-01-15"), (2024, 1, 15));
        assert_eq!(ymd("2024-03"), (2024, 3, 1));
        assert_eq!(ymd("2024"), (2024, 1, 1));
        let dt = DateInput::from("2024-01-15").to_utc().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn naive_date_time_is_read_as_utc() {
        let dt = DateInput::from("2024-01-15T23:59").to_utc().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 0).unwrap());
        let dt = DateInput::from("2024-01-15 08:00:00.250").to_utc().unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn common_front_matter_spellings_are_accepted() {
        let rows = [
            ("2024/01/15", (2024, 1, 15)),
            ("2024/1/5", (2024, 1, 5)),
            ("January 15, 2024", (2024, 1, 15)),
            ("Jan 15, 2024", (2024, 1, 15)),
            ("Jan 15 2024", (2024, 1, 15)),
            ("2024-1-5", (2024, 1, 5)),
            ("+002024-01-15T00:00:00Z", (2024, 1, 15)),
            ("+002024-02-29", (2024, 2, 29)),
        ];
        for (text, expected) in rows {
            assert_eq!(ymd(text), expected, "text: {text:?}");
        }
        let dt = DateInput::from("2024-1-5").to_utc().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn expanded_years_keep_their_sign_and_offset() {
        assert_eq!(ymd("+010000-01-01T00:00:00Z"), (10000, 1, 1));
        assert_eq!(ymd("-000001-06-01"), (-1, 6, 1));
        assert_eq!(ymd("+002024-01-01T02:00:00+05:00"), (2023, 12, 31));
        for text in ["-000000-01-01", "+002023-02-29", "+2024-01-15", "+00202a-01-01"] {
            assert!(DateInput::from(text).to_utc().is_err(), "text: {text:?}");
        }
    }

    #[test]
    fn rfc2822_is_accepted() {
        assert_eq!(ymd("Mon, 15 Jan 2024 00:00:00 GMT"), (2024, 1, 15));
    }

    #[test]
    fn timestamps_are_milliseconds() {
        assert_eq!(ymd(1_705_276_800_000i64), (2024, 1, 15));
        assert_eq!(ymd(0i64), (1970, 1, 1));
        assert_eq!(ymd(-86_400_000i64), (1969, 12, 31));
    }

    #[test]
    fn out_of_range_timestamps_are_invalid() {
        assert_eq!(ymd(253_402_300_799_999i64), (9999, 12, 31));
        assert!(DateInput::from(MAX_TIMESTAMP_MILLIS).to_utc().is_err());
        assert!(matches!(
            DateInput::from(MAX_TIMESTAMP_MILLIS + 1).to_utc(),
            Err(DomainError::InvalidDate(_))
        ));
        assert!(DateInput::from(i64::MIN).to_utc().is_err());
    }

    #[test]
    fn garbage_text_is_invalid() {
        for text in [
            "",
            "   ",
            "not a date",
            "2024-13-01",
            "2024-02-30",
            "24-01-15",
            "24/01/15",
            "20245-01-01",
            "Smarch 15, 2024",
        ] {
            assert!(
                matches!(DateInput::from(text).to_utc(), Err(DomainError::InvalidDate(_))),
                "expected {text:?} to be invalid"
            );
        }
    }

    #[test]
    fn naive_dates_and_offsets_convert() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        assert_eq!(ymd(date), (2023, 7, 4));
        let fixed = DateTime::parse_from_rfc3339("2023-07-04T01:00:00+09:00").unwrap();
        assert_eq!(ymd(fixed), (2023, 7, 3));
    }

    #[test]
    fn deserializes_untagged_values() {
        let input: DateInput = serde_json::from_str("1705276800000").unwrap();
        assert_eq!(input, DateInput::Timestamp(1_705_276_800_000));

        let input: DateInput = serde_json::from_str("\"2024-01-15T00:00:00Z\"").unwrap();
        assert!(matches!(input, DateInput::Instant(_)));

        let input: DateInput = serde_json::from_str("\"2024-01-15\"").unwrap();
        assert_eq!(input, DateInput::Text("2024-01-15".into()));
    }

    #[test]
    fn date_style_parses_case_insensitively() {
        assert_eq!("LONG".parse::<DateStyle>().unwrap(), DateStyle::Long);
        assert_eq!(" short ".parse::<DateStyle>().unwrap(), DateStyle::Numeric);
        assert!("fancy".parse::<DateStyle>().is_err());
        assert_eq!(DateStyle::default(), DateStyle::Numeric);
        assert_eq!(DateStyle::Medium.to_string(), "medium");
    }

    #[test]
    fn render_covers_every_style() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(DateStyle::Numeric.render(&instant), "1/5/2024");
        assert_eq!(DateStyle::Medium.render(&instant), "Jan 5, 2024");
        assert_eq!(DateStyle::Long.render(&instant), "January 5, 2024");
        assert_eq!(DateStyle::Full.render(&instant), "Friday, January 5, 2024");
    }

    #[test]
    fn render_does_not_sign_five_digit_years() {
        let instant = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(DateStyle::Numeric.render(&instant), "1/1/10000");
    }
}
