#![doc = include_str!("../README.md")]

mod consts;
mod prelude;
mod select;
mod sync;
mod types;
mod validate;

pub use consts::*;
pub use select::{Select, SelectControl};
pub use sync::{
    DateForm, Field, SyncError, SyncState, clear_day_options, populate_month_options,
    populate_year_options, refresh_day_options,
};
pub use types::{Month, SelectOption, SelectionState, days_in_month, is_leap_year};
pub use validate::{Alert, RegistrationForm, Rejection, ValidationRules, check_form};

use crate::prelude::*;

/// A control value that does not fit the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day: {} (must be {}-31)", "_0", MIN_DAY)]
    InvalidDay(i64),
}

impl std::error::Error for ParseError {}
