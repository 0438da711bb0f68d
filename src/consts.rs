use std::num::NonZeroU16;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, also the first value offered by the day dropdown
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a non-leap year, January first.
/// Indexed by `month - 1`.
pub const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Years offered before the current year; the same count is offered from the
/// current year onward, giving `[current - span, current + span)`.
pub const YEAR_SPAN: NonZeroU16 = match NonZeroU16::new(50) {
    Some(span) => span,
    None => panic!("year span must be non-zero"),
};

/// Label suffixes for the three dropdowns
pub const YEAR_SUFFIX: &str = "年";
pub const MONTH_SUFFIX: &str = "月";
pub const DAY_SUFFIX: &str = "日";

/// Index of the leading placeholder option in every date dropdown
pub const PLACEHOLDER_INDEX: usize = 0;

/// Username length bounds (inclusive, in characters)
pub const USERNAME_MIN_LEN: usize = 1;
pub const USERNAME_MAX_LEN: usize = 60;

/// Password length bounds (inclusive, in characters)
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 30;
