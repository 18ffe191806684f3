//! Timestamp-facing adapter over the analog clock state.

use tracing::debug;

use horae_angles::{to_angles, to_time, ClockAngles, ClockError, DayNightDivision, Timestamp};

use crate::analog::AnalogClock;

/// Adapter presenting an [`AnalogClock`] through a timestamp interface.
///
/// This is the only place where the angle store and the pure conversion
/// functions meet: `set_date_time` converts a validated [`Timestamp`] into
/// hand angles before storing, and [`date_time`](Self::date_time) inverts
/// the stored angles back into a timestamp. The adapter performs no
/// arithmetic of its own beyond delegation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DigitalClock {
    analog: AnalogClock,
}

impl DigitalClock {
    /// Creates an adapter over a freshly zeroed [`AnalogClock`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter over an existing [`AnalogClock`].
    pub fn from_analog(analog: AnalogClock) -> Self {
        Self { analog }
    }

    /// Converts the timestamp into dial angles and stores them.
    ///
    /// A [`Timestamp`] is valid by construction, so this cannot fail; an
    /// ill-formed input is rejected earlier, at [`Timestamp::new`], leaving
    /// any previously stored state untouched.
    pub fn set_date_time(&mut self, timestamp: Timestamp) {
        let angles = to_angles(timestamp);
        debug!(
            %timestamp,
            hour_angle = angles.hour_angle(),
            minute_angle = angles.minute_angle(),
            second_angle = angles.second_angle(),
            division = %angles.division(),
            "setting clock"
        );
        self.analog.set_date_time(
            timestamp.year(),
            timestamp.month(),
            timestamp.day(),
            angles.hour_angle(),
            angles.minute_angle(),
            angles.second_angle(),
            angles.division(),
        );
    }

    /// Recovers the stored date and time as a [`Timestamp`].
    ///
    /// The stored hand angles are inverted back into a time of day and
    /// reassembled with the stored year, month, and day.
    ///
    /// # Errors
    ///
    /// The underlying [`AnalogClock`] stores raw fields without validation,
    /// so this re-validates on the way out: returns
    /// [`ClockError::InvalidAngle`] if a stored angle is off the dial, or a
    /// date-field error if the stored date is ill-formed (including the
    /// zeroed state of a clock that was never set).
    pub fn date_time(&self) -> Result<Timestamp, ClockError> {
        let angles = ClockAngles::new(
            self.analog.hour_angle(),
            self.analog.minute_angle(),
            self.analog.second_angle(),
            self.analog.division(),
        )?;
        let (hour, minute, second) = to_time(angles);
        Timestamp::new(
            self.analog.year(),
            self.analog.month(),
            self.analog.day(),
            hour,
            minute,
            second,
        )
    }

    /// Returns the stored hour hand angle in degrees.
    pub fn hour_angle(&self) -> f64 {
        self.analog.hour_angle()
    }

    /// Returns the stored minute hand angle in degrees.
    pub fn minute_angle(&self) -> f64 {
        self.analog.minute_angle()
    }

    /// Returns the stored second hand angle in degrees.
    pub fn second_angle(&self) -> f64 {
        self.analog.second_angle()
    }

    /// Returns the stored AM/PM division.
    pub fn division(&self) -> DayNightDivision {
        self.analog.division()
    }

    /// Returns the underlying analog state.
    pub fn analog(&self) -> &AnalogClock {
        &self.analog
    }

    /// Returns the underlying analog state mutably.
    pub fn analog_mut(&mut self) -> &mut AnalogClock {
        &mut self.analog
    }
}
