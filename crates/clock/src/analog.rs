//! Raw analog clock face state.

use horae_angles::DayNightDivision;

/// The raw state of an analog clock face: a calendar date plus the three
/// hand angles and the AM/PM division.
///
/// This is a dumb value holder. `set_date_time` overwrites every field
/// unconditionally and performs no validation; the stored fields are
/// returned verbatim by the accessors. Callers own the ranges — the
/// timestamp-facing [`DigitalClock`] re-validates on the way out.
///
/// [`DigitalClock`]: crate::DigitalClock
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalogClock {
    year: i32,
    month: u8,
    day: u8,
    hour_angle: f64,
    minute_angle: f64,
    second_angle: f64,
    division: DayNightDivision,
}

impl AnalogClock {
    /// Creates a clock with all fields zeroed and the division set to `Am`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored date, hand angles, and division.
    #[allow(clippy::too_many_arguments)]
    pub fn set_date_time(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        hour_angle: f64,
        minute_angle: f64,
        second_angle: f64,
        division: DayNightDivision,
    ) {
        self.year = year;
        self.month = month;
        self.day = day;
        self.hour_angle = hour_angle;
        self.minute_angle = minute_angle;
        self.second_angle = second_angle;
        self.division = division;
    }

    /// Returns the stored year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the stored month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the stored day.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the stored hour hand angle in degrees.
    pub fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Returns the stored minute hand angle in degrees.
    pub fn minute_angle(&self) -> f64 {
        self.minute_angle
    }

    /// Returns the stored second hand angle in degrees.
    pub fn second_angle(&self) -> f64 {
        self.second_angle
    }

    /// Returns the stored AM/PM division.
    pub fn division(&self) -> DayNightDivision {
        self.division
    }
}
