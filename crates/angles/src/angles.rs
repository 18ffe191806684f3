//! Dial angle value type.

use crate::division::DayNightDivision;
use crate::error::ClockError;

/// The positions of the three hands on a 360° dial, plus the AM/PM division.
///
/// Angles are measured in degrees clockwise from the 12 o'clock mark and are
/// always in `[0, 360)`. A `ClockAngles` value is derived, never
/// authoritative: it is either computed from a [`Timestamp`] by
/// [`to_angles`] or validated field-by-field by [`ClockAngles::new`].
///
/// [`Timestamp`]: crate::Timestamp
/// [`to_angles`]: crate::to_angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAngles {
    hour_angle: f64,
    minute_angle: f64,
    second_angle: f64,
    division: DayNightDivision,
}

fn check_angle(angle: f64) -> Result<f64, ClockError> {
    if !(0.0..360.0).contains(&angle) {
        return Err(ClockError::InvalidAngle { angle });
    }
    Ok(angle)
}

impl ClockAngles {
    /// Creates a new `ClockAngles` from raw hand angles.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidAngle`] if any angle is outside
    /// `[0, 360)` (NaN is rejected as well).
    pub fn new(
        hour_angle: f64,
        minute_angle: f64,
        second_angle: f64,
        division: DayNightDivision,
    ) -> Result<Self, ClockError> {
        Ok(Self {
            hour_angle: check_angle(hour_angle)?,
            minute_angle: check_angle(minute_angle)?,
            second_angle: check_angle(second_angle)?,
            division,
        })
    }

    /// Crate-internal constructor for angles already known to lie on the dial.
    pub(crate) fn from_dial_positions(
        hour_angle: f64,
        minute_angle: f64,
        second_angle: f64,
        division: DayNightDivision,
    ) -> Self {
        Self {
            hour_angle,
            minute_angle,
            second_angle,
            division,
        }
    }

    /// Returns the hour hand angle in degrees.
    pub fn hour_angle(self) -> f64 {
        self.hour_angle
    }

    /// Returns the minute hand angle in degrees.
    pub fn minute_angle(self) -> f64 {
        self.minute_angle
    }

    /// Returns the second hand angle in degrees.
    pub fn second_angle(self) -> f64 {
        self.second_angle
    }

    /// Returns the AM/PM division.
    pub fn division(self) -> DayNightDivision {
        self.division
    }
}
