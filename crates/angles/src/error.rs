//! Error types for the horae-angles crate.

/// Error type for all fallible operations in the horae-angles crate.
///
/// This enum covers validation failures for every field of a calendar
/// timestamp as well as hand angles outside the dial range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum ClockError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour value is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when a minute value is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute value that was provided.
        minute: u8,
    },

    /// Returned when a second value is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second value that was provided.
        second: u8,
    },

    /// Returned when a hand angle is outside the dial range `[0, 360)`.
    #[error("invalid hand angle: {angle} (must be in [0, 360))")]
    InvalidAngle {
        /// The invalid angle, in degrees, that was provided.
        angle: f64,
    },
}
