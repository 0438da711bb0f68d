//! Year/month/day dropdown synchronization.
//!
//! [`DateForm`] owns the three controls and keeps the day list equal to
//! `1..=days_in_month(year, month)` whenever both year and month are selected,
//! and empty (placeholder only) otherwise.

use crate::ParseError;
use crate::consts::{
    DAY_SUFFIX, MAX_MONTH, MIN_DAY, MONTH_SUFFIX, PLACEHOLDER_INDEX, YEAR_SPAN, YEAR_SUFFIX,
};
use crate::prelude::*;
use crate::select::{Select, SelectControl};
use crate::types::{Month, SelectOption, SelectionState};
use chrono::{Datelike, Local, NaiveDate};
use std::num::NonZeroU16;
use tracing::{debug, trace};

/// The control whose selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
}

/// Where the form is in its lifecycle. Once initialized it only moves between
/// the two `*Changed` states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum SyncState {
    #[default]
    #[display(fmt = "uninitialized")]
    Uninitialized,
    #[display(fmt = "initialized")]
    Initialized,
    #[display(fmt = "year changed")]
    YearChanged,
    #[display(fmt = "month changed")]
    MonthChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("Date form is already initialized")]
    AlreadyInitialized,

    #[error("Date form must be initialized before handling {0} changes")]
    NotInitialized(Field),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Three linked dropdowns: year, month and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateForm<S = SelectControl> {
    year:      S,
    month:     S,
    day:       S,
    state:     SyncState,
    year_span: NonZeroU16,
}

impl DateForm<SelectControl> {
    /// Three in-memory controls, each starting with a selected placeholder.
    pub fn new() -> Self {
        Self::from_controls(
            SelectControl::with_placeholder(YEAR_SUFFIX),
            SelectControl::with_placeholder(MONTH_SUFFIX),
            SelectControl::with_placeholder(DAY_SUFFIX),
        )
    }
}

impl Default for DateForm<SelectControl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Select> DateForm<S> {
    /// Wraps host-provided controls. Each should hold only its placeholder.
    pub const fn from_controls(year: S, month: S, day: S) -> Self {
        Self {
            year,
            month,
            day,
            state: SyncState::Uninitialized,
            year_span: YEAR_SPAN,
        }
    }

    /// Overrides how many years are offered on each side of the current year.
    #[must_use]
    pub const fn with_year_span(mut self, span: NonZeroU16) -> Self {
        self.year_span = span;
        self
    }

    pub const fn state(&self) -> SyncState {
        self.state
    }

    pub const fn year(&self) -> &S {
        &self.year
    }

    pub const fn month(&self) -> &S {
        &self.month
    }

    pub const fn day(&self) -> &S {
        &self.day
    }

    /// Mutable access for hosts that change a selection directly; follow up
    /// with [`DateForm::on_change`].
    pub const fn year_mut(&mut self) -> &mut S {
        &mut self.year
    }

    pub const fn month_mut(&mut self) -> &mut S {
        &mut self.month
    }

    pub const fn day_mut(&mut self) -> &mut S {
        &mut self.day
    }

    /// Page-load handler: fills year and month, selects `today`, and builds the
    /// day list from what the year and month controls ended up selecting.
    ///
    /// # Errors
    /// Returns `SyncError::AlreadyInitialized` on a second call, and
    /// `SyncError::Parse` if the month control holds a value outside 1..=12.
    pub fn initialize(&mut self, today: NaiveDate) -> Result<SyncState, SyncError> {
        if self.state != SyncState::Uninitialized {
            return Err(SyncError::AlreadyInitialized);
        }

        let year = today.year();
        let month = month_of(today)?;
        let day = i32::try_from(today.day())
            .map_err(|_| ParseError::InvalidDay(i64::from(today.day())))?;

        populate_year_options(&mut self.year, year, self.year_span);
        populate_month_options(&mut self.month);
        self.year.set_value(year);
        self.month.set_value(i32::from(month.get()));
        let days = self.sync_days()?;
        if days.is_some() {
            self.day.set_value(day);
        }

        self.state = SyncState::Initialized;
        debug!(%today, ?days, "date form initialized");
        Ok(self.state)
    }

    /// [`DateForm::initialize`] with the local calendar date.
    ///
    /// # Errors
    /// Returns `SyncError::AlreadyInitialized` on a second call.
    pub fn initialize_today(&mut self) -> Result<SyncState, SyncError> {
        self.initialize(Local::now().date_naive())
    }

    /// Selection-change handler for the year or month control.
    ///
    /// When the other control is unset the day list is cleared to its
    /// placeholder. Otherwise it is rebuilt for the selected year and month; a
    /// previously selected day is kept if it still exists, else the control
    /// falls back to its default index.
    ///
    /// # Errors
    /// Returns `SyncError::NotInitialized` before [`DateForm::initialize`], and
    /// `SyncError::Parse` if the month control holds a value outside 1..=12.
    pub fn on_change(&mut self, field: Field) -> Result<SyncState, SyncError> {
        if self.state == SyncState::Uninitialized {
            return Err(SyncError::NotInitialized(field));
        }

        let days = self.sync_days()?;
        debug!(%field, ?days, "day options synced");

        self.state = match field {
            Field::Year => SyncState::YearChanged,
            Field::Month => SyncState::MonthChanged,
        };
        Ok(self.state)
    }

    /// Selects `year` (or the placeholder for `None`) and runs the year handler.
    /// A year not in the list leaves the control unselected.
    ///
    /// # Errors
    /// See [`DateForm::on_change`].
    pub fn select_year(&mut self, year: Option<i32>) -> Result<SyncState, SyncError> {
        select_or_placeholder(&mut self.year, year);
        self.on_change(Field::Year)
    }

    /// Selects `month` (or the placeholder for `None`) and runs the month handler.
    ///
    /// # Errors
    /// See [`DateForm::on_change`].
    pub fn select_month(&mut self, month: Option<u8>) -> Result<SyncState, SyncError> {
        select_or_placeholder(&mut self.month, month.map(i32::from));
        self.on_change(Field::Month)
    }

    /// Selects `day` if the current list offers it.
    pub fn select_day(&mut self, day: u8) -> bool {
        self.day.set_value(i32::from(day))
    }

    /// Reads the current selection back from the controls.
    ///
    /// # Errors
    /// Returns `ParseError` if the month or day control holds an out-of-range value.
    pub fn selection(&self) -> Result<SelectionState, ParseError> {
        let month = self.month.selected_value().map(Month::try_from).transpose()?;
        let day = self
            .day
            .selected_value()
            .map(|d| u8::try_from(d).map_err(|_| ParseError::InvalidDay(i64::from(d))))
            .transpose()?;
        Ok(SelectionState {
            year: self.year.selected_value(),
            month,
            day,
        })
    }

    /// Rebuilds the day list for the selected year and month, or clears it
    /// when either is unset. Returns the new day count.
    fn sync_days(&mut self) -> Result<Option<u8>, ParseError> {
        match (self.year.selected_value(), self.month.selected_value()) {
            (Some(year), Some(month)) => {
                let day_count = Month::try_from(month)?.days_in(year);
                self.refresh_days(day_count);
                Ok(Some(day_count))
            }
            _ => {
                clear_day_options(&mut self.day);
                Ok(None)
            }
        }
    }

    fn refresh_days(&mut self, day_count: u8) {
        let previous = self.day.selected_value();
        refresh_day_options(&mut self.day, day_count);
        let bound = i32::from(MIN_DAY)..=i32::from(day_count);
        if let Some(day) = previous.filter(|d| bound.contains(d)) {
            self.day.set_value(day);
        }
    }
}

fn month_of(date: NaiveDate) -> Result<Month, ParseError> {
    let raw = date.month();
    u8::try_from(raw)
        .map_err(|_| ParseError::InvalidMonth(i64::from(raw)))
        .and_then(Month::new)
}

fn select_or_placeholder<S: Select>(control: &mut S, value: Option<i32>) {
    match value {
        Some(value) => {
            control.set_value(value);
        }
        None => control.select_index(Some(PLACEHOLDER_INDEX)),
    }
}

/// Number of leading options to keep when clearing: the placeholder, if any.
fn placeholder_len<S: Select>(control: &S) -> usize {
    usize::from(
        control
            .options()
            .first()
            .is_some_and(SelectOption::is_placeholder),
    )
}

/// Appends `[current_year - span, current_year + span)`, labelled "<year> 年".
pub fn populate_year_options<S: Select>(control: &mut S, current_year: i32, span: NonZeroU16) {
    let span = i32::from(span.get());
    let first = current_year.saturating_sub(span);
    let last = current_year.saturating_add(span);
    for year in first..last {
        control.push_option(SelectOption::new(year, format!("{year} {YEAR_SUFFIX}")));
    }
    trace!(first, last, "year options populated");
}

/// Appends months 1..=12, labelled "<n> 月".
pub fn populate_month_options<S: Select>(control: &mut S) {
    for month in 1..=MAX_MONTH {
        control.push_option(SelectOption::new(
            i32::from(month),
            format!("{month} {MONTH_SUFFIX}"),
        ));
    }
    trace!("month options populated");
}

/// Drops every option except a leading placeholder.
pub fn clear_day_options<S: Select>(control: &mut S) {
    let keep = placeholder_len(control);
    control.truncate(keep);
}

/// Replaces the day options with 1..=`day_count`, labelled "<n> 日".
/// Calling it again with the same count yields the same list.
pub fn refresh_day_options<S: Select>(control: &mut S, day_count: u8) {
    clear_day_options(control);
    for day in MIN_DAY..=day_count {
        control.push_option(SelectOption::new(
            i32::from(day),
            format!("{day} {DAY_SUFFIX}"),
        ));
    }
    trace!(day_count, "day options written");
}
