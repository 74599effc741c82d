use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::{Hit, Kind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Ordinal(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("number out of range: {0}")]
    InvalidNumber(String),
    #[error("no such calendar date: {0}")]
    InvalidDate(String),
    #[error("no such time of day: {0}")]
    InvalidTime(String),
    #[error("{0} does not hold a {1} value")]
    Malformed(String, Kind),
}

impl<'t> Hit<'t> {
    /// Converts the matched text into a typed value.
    ///
    /// Extraction only checks numeric ranges, so `2015-02-30` is a valid hit
    /// but fails here with [`ConvertError::InvalidDate`].
    pub fn value(&self) -> Result<Value, ConvertError> {
        let s = self.as_str();
        match self.kind() {
            Kind::Integer => parse_integer(s).map(Value::Integer),
            Kind::Ordinal => parse_ordinal(s).map(Value::Ordinal),
            Kind::DateIso8601 => parse_iso8601(s),
            Kind::DateDdMonYyyy => parse_ddmonyyyy(s).map(Value::Date),
        }
    }
}

fn parse_integer(s: &str) -> Result<i64, ConvertError> {
    let digits: String = s.chars().filter(|&c| c != ',').collect();
    digits
        .parse::<i64>()
        .map_err(|_| ConvertError::InvalidNumber(s.to_string()))
}

fn parse_ordinal(s: &str) -> Result<i64, ConvertError> {
    // every ordinal suffix is two ASCII letters
    let number = s
        .get(..s.len().saturating_sub(2))
        .ok_or_else(|| ConvertError::Malformed(s.to_string(), Kind::Ordinal))?;
    number
        .parse::<i64>()
        .map_err(|_| ConvertError::InvalidNumber(s.to_string()))
}

fn parse_iso8601(s: &str) -> Result<Value, ConvertError> {
    let date = s
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .ok_or_else(|| ConvertError::InvalidDate(s.to_string()))?;
    if s.len() == 10 {
        return Ok(Value::Date(date));
    }

    // %.f also accepts a missing fraction
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Value::DateTime(dt));
        }
    }

    // The date part is fine, so the time of day is not
    Err(ConvertError::InvalidTime(s.to_string()))
}

fn parse_ddmonyyyy(s: &str) -> Result<NaiveDate, ConvertError> {
    let normalized = s.replace(',', " ").split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDate::parse_from_str(&normalized, "%d %b %Y").map_err(|_| ConvertError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_strips_grouping() {
        assert_eq!(parse_integer("123,456,789"), Ok(123_456_789));
        assert!(matches!(parse_integer("99999999999999999999"), Err(ConvertError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal("21st"), Ok(21));
        assert_eq!(parse_ordinal("-3rd"), Ok(-3));
    }

    #[test]
    fn test_parse_iso8601_date_only() {
        assert_eq!(
            parse_iso8601("2015-07-25"),
            Ok(Value::Date(NaiveDate::from_ymd_opt(2015, 7, 25).unwrap()))
        );
    }

    #[test]
    fn test_parse_iso8601_minutes() {
        let expected = NaiveDate::from_ymd_opt(2018, 6, 22).unwrap().and_hms_opt(18, 22, 0).unwrap();
        assert_eq!(parse_iso8601("2018-06-22 18:22"), Ok(Value::DateTime(expected)));
    }

    #[test]
    fn test_parse_iso8601_seconds_and_fraction() {
        let date = NaiveDate::from_ymd_opt(2018, 6, 22).unwrap();
        assert_eq!(
            parse_iso8601("2018-06-22 18:22:19"),
            Ok(Value::DateTime(date.and_hms_opt(18, 22, 19).unwrap()))
        );
        assert_eq!(
            parse_iso8601("2018-06-22T18:22:19.123"),
            Ok(Value::DateTime(date.and_hms_milli_opt(18, 22, 19, 123).unwrap()))
        );
    }

    #[test]
    fn test_parse_iso8601_rejects_bad_calendar_date() {
        assert!(matches!(parse_iso8601("2015-02-30"), Err(ConvertError::InvalidDate(_))));
        assert!(matches!(parse_iso8601("2015-02-30 10:00"), Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_iso8601_rejects_bad_time() {
        assert!(matches!(parse_iso8601("2015-02-03 25:00"), Err(ConvertError::InvalidTime(_))));
        assert!(matches!(parse_iso8601("2015-02-03T10:61:00"), Err(ConvertError::InvalidTime(_))));
    }

    #[test]
    fn test_parse_ddmonyyyy() {
        assert_eq!(parse_ddmonyyyy("25  Jul,\t2015"), Ok(NaiveDate::from_ymd_opt(2015, 7, 25).unwrap()));
        assert_eq!(parse_ddmonyyyy("01 Dec 1999"), Ok(NaiveDate::from_ymd_opt(1999, 12, 1).unwrap()));
        assert!(matches!(parse_ddmonyyyy("31 Apr 2015"), Err(ConvertError::InvalidDate(_))));
    }
}
