use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
    MONTH_LENGTHS,
};
use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(i64::from(value)))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in `year`
    #[inline]
    pub const fn days_in(self, year: i32) -> u8 {
        days_in_month(year, self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Option values are stored as `i32`, so the month control hands them back that way.
impl TryFrom<i32> for Month {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ParseError::InvalidMonth(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a dropdown: the underlying value and the text shown to the user.
/// A `None` value marks the placeholder ("no selection") entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{label}")]
pub struct SelectOption {
    pub value: Option<i32>,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            label: label.into(),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: None,
            label: label.into(),
        }
    }

    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// The (year, month, day) triple as currently selected in the three dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub day: Option<u8>,
}

impl SelectionState {
    /// Returns the selected calendar date when all three components are set
    /// and form a date chrono can represent.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = (self.year?, self.month?, self.day?);
        NaiveDate::from_ymd_opt(year, u32::from(month.get()), u32::from(day))
    }
}

// Helper functions

/// Gregorian rule. Years are absolute, so negative (proleptic) years work too.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_try_from_i32() {
        let month: Month = 2_i32.try_into().unwrap();
        assert_eq!(month.get(), 2);

        let result: Result<Month, _> = (-1_i32).try_into();
        assert!(matches!(result, Err(ParseError::InvalidMonth(-1))));

        let result: Result<Month, _> = 300_i32.try_into();
        assert!(matches!(result, Err(ParseError::InvalidMonth(300))));
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_select_option_display_uses_label() {
        let option = SelectOption::new(7, "7 月");
        assert_eq!(option.to_string(), "7 月");
        assert!(!option.is_placeholder());
        assert!(SelectOption::placeholder("--").is_placeholder());
    }

    #[test]
    fn test_selection_state_to_date() {
        let state = SelectionState {
            year: Some(2024),
            month: Some(Month::new(2).unwrap()),
            day: Some(29),
        };
        assert_eq!(state.to_date(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let partial = SelectionState {
            day: None,
            ..state
        };
        assert_eq!(partial.to_date(), None);

        let impossible = SelectionState {
            year: Some(2023),
            ..state
        };
        assert_eq!(impossible.to_date(), None);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2004,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_february_tracks_leap_rule() {
        for year in [1900, 2000, 2004, 2023, 2024, 2100, 2400, -4, 1] {
            let expected = if is_leap_year(year) { 29 } else { 28 };
            assert_eq!(days_in_month(year, 2), expected, "February {year}");
        }
    }

    #[test]
    fn test_other_months_ignore_year() {
        for month in (1..=12).filter(|m| *m != 2) {
            let reference = days_in_month(2023, month);
            for year in [1900, 2000, 2024, -7] {
                assert_eq!(days_in_month(year, month), reference, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12_u8 {
            assert_eq!(
                Month::new(month).unwrap().days_in(2023),
                expected[usize::from(month - 1)],
                "Month {month} has incorrect day count"
            );
        }
    }
}
