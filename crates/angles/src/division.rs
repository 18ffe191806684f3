//! AM/PM division of the day.

use std::fmt;

use crate::convert::HOURS_ON_DIAL;

/// Marker disambiguating the 12-hour angle representation of a time of day.
///
/// A dial position alone cannot distinguish 03:00 from 15:00, or midnight
/// from noon; the division carries the missing half-day bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DayNightDivision {
    /// Ante meridiem: hours 0..=11.
    #[default]
    Am,
    /// Post meridiem: hours 12..=23.
    Pm,
}

impl DayNightDivision {
    /// Returns the division for an hour on the 24-hour clock.
    pub fn from_hour(hour: u8) -> Self {
        if hour < HOURS_ON_DIAL {
            Self::Am
        } else {
            Self::Pm
        }
    }
}

impl fmt::Display for DayNightDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}
