//! Calendar date parsing and serialization

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use masinica_types::ValidationError;

/// Parse a date typed by the user: `YYYY-MM-DD` or `DD/MM/YYYY`
pub fn parse_user_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingExpirationDate);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parse a stored ISO-8601 value, keeping only the calendar date.
/// Older records hold a full date-time.
pub(crate) fn parse_iso(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(datetime) = value.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Serde adapter: writes `YYYY-MM-DD`, reads dates and date-times
pub(crate) mod iso {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_user_date_formats() {
        assert_eq!(parse_user_date("2026-10-18"), Ok(ymd(2026, 10, 18)));
        assert_eq!(parse_user_date("18/10/2026"), Ok(ymd(2026, 10, 18)));
        assert_eq!(parse_user_date(" 01/02/2027 "), Ok(ymd(2027, 2, 1)));
    }

    #[test]
    fn test_parse_user_date_rejects() {
        assert_eq!(parse_user_date(""), Err(ValidationError::MissingExpirationDate));
        assert_eq!(
            parse_user_date("31/02/2026"),
            Err(ValidationError::InvalidDate("31/02/2026".to_string()))
        );
    }

    #[test]
    fn test_parse_iso_variants() {
        assert_eq!(parse_iso("2026-03-01"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_iso("2026-03-01T00:00:00"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_iso("2026-03-01T13:45:10.250000"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_iso("2026-03-01T22:00:00+02:00"), Some(ymd(2026, 3, 1)));
        assert_eq!(parse_iso("tomorrow"), None);
    }
}
