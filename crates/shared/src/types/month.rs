//! Calendar month in `YYYY-MM` form.
//!
//! Payments and expenses are booked against a month stored as a
//! seven-character string. Parsing goes through this type so that malformed
//! input never reaches the database.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the stored `YYYY-MM` representation.
pub const MONTH_LEN: usize = 7;

/// Errors produced when parsing a month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    /// Input is not shaped like `YYYY-MM`.
    #[error("month must be formatted as YYYY-MM, got {0:?}")]
    Format(String),
    /// Month number outside 01..=12.
    #[error("month number must be between 01 and 12, got {0}")]
    OutOfRange(u32),
    /// Year outside 0..=9999, which would not fit the `YYYY` field.
    #[error("year must be between 0000 and 9999, got {0}")]
    YearOutOfRange(i32),
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month, validating the month number and year.
    ///
    /// # Errors
    ///
    /// Returns `MonthError::OutOfRange` if `month` is not in 1..=12 and
    /// `MonthError::YearOutOfRange` if `year` is not in 0..=9999.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::OutOfRange(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(MonthError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly four digits, a dash and
    /// two digits, or if the month number is out of range.
    pub fn parse(input: &str) -> Result<Self, MonthError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == MONTH_LEN
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthError::Format(input.to_string()));
        }

        let year = input[..4]
            .parse()
            .map_err(|_| MonthError::Format(input.to_string()))?;
        let month = input[5..]
            .parse()
            .map_err(|_| MonthError::Format(input.to_string()))?;
        Self::new(year, month)
    }

    /// Returns the month containing the given date.
    ///
    /// # Errors
    ///
    /// Returns `MonthError::YearOutOfRange` for dates outside years
    /// 0..=9999.
    pub fn of(date: NaiveDate) -> Result<Self, MonthError> {
        Self::new(date.year(), date.month())
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01", 2024, 1)]
    #[case("2024-12", 2024, 12)]
    #[case("0999-06", 999, 6)]
    fn test_parse_valid(#[case] input: &str, #[case] year: i32, #[case] month: u32) {
        let parsed = Month::parse(input).unwrap();
        assert_eq!(parsed.year(), year);
        assert_eq!(parsed.month(), month);
        assert_eq!(parsed.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("2024-1")]
    #[case("2024/01")]
    #[case("24-01-01")]
    #[case("2024-011")]
    #[case("abcd-ef")]
    #[case("+024-01")]
    fn test_parse_rejects_bad_format(#[case] input: &str) {
        assert!(matches!(Month::parse(input), Err(MonthError::Format(_))));
    }

    #[rstest]
    #[case("2024-00", 0)]
    #[case("2024-13", 13)]
    fn test_parse_rejects_month_out_of_range(#[case] input: &str, #[case] month: u32) {
        assert_eq!(Month::parse(input), Err(MonthError::OutOfRange(month)));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let month: Month = serde_json::from_str("\"2023-07\"").unwrap();
        assert_eq!(month, Month::new(2023, 7).unwrap());
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2023-07\"");
        assert!(serde_json::from_str::<Month>("\"July 2023\"").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec = Month::parse("2023-12").unwrap();
        let jan = Month::parse("2024-01").unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(Month::of(date).unwrap().to_string(), "2025-03");
    }

    #[rstest]
    #[case(10_000)]
    #[case(-1)]
    fn test_of_rejects_years_wider_than_four_digits(#[case] year: i32) {
        let date = NaiveDate::from_ymd_opt(year, 1, 15).unwrap();
        assert_eq!(Month::of(date), Err(MonthError::YearOutOfRange(year)));
    }

    #[test]
    fn test_new_rejects_year_out_of_range() {
        assert_eq!(Month::new(10_000, 1), Err(MonthError::YearOutOfRange(10_000)));
    }

    proptest! {
        #[test]
        fn prop_display_is_fixed_width(year in 0i32..=9999, month in 1u32..=12) {
            let value = Month::new(year, month).unwrap();
            let text = value.to_string();
            prop_assert_eq!(text.len(), MONTH_LEN);
            prop_assert_eq!(Month::parse(&text).unwrap(), value);
        }
    }
}
