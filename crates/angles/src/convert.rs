//! Pure conversion functions between timestamps and dial angles.

use crate::angles::ClockAngles;
use crate::division::DayNightDivision;
use crate::timestamp::Timestamp;

/// Degrees swept by the hour hand per hour on the 12-hour dial (360 / 12).
pub const DEGREES_PER_HOUR: f64 = 30.0;

/// Degrees swept by the minute hand per minute (360 / 60).
pub const DEGREES_PER_MINUTE: f64 = 6.0;

/// Degrees swept by the second hand per second (360 / 60).
pub const DEGREES_PER_SECOND: f64 = 6.0;

/// Number of hours on the dial (half a day).
pub const HOURS_ON_DIAL: u8 = 12;

/// The hour at which a new day starts on the 24-hour clock.
pub const MIDNIGHT_HOUR: u8 = 0;

/// Computes the dial angles for a timestamp's time of day.
///
/// The hour hand snaps to whole hours (no fractional advance within the
/// hour); minute and second hands snap to whole minutes and seconds. All
/// produced angles lie in `[0, 360)`, which is why this function is
/// infallible on a validated [`Timestamp`].
///
/// # Examples
///
/// ```ignore
/// let ts = Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap();
/// let angles = to_angles(ts);
/// assert_eq!(angles.hour_angle(), 90.0);   // 3 o'clock
/// assert_eq!(angles.minute_angle(), 180.0); // half past
/// assert_eq!(angles.second_angle(), 270.0); // 45 seconds
/// ```
pub fn to_angles(timestamp: Timestamp) -> ClockAngles {
    let hour_angle = f64::from(timestamp.hour() % HOURS_ON_DIAL) * DEGREES_PER_HOUR;
    let minute_angle = f64::from(timestamp.minute()) * DEGREES_PER_MINUTE;
    let second_angle = f64::from(timestamp.second()) * DEGREES_PER_SECOND;
    let division = DayNightDivision::from_hour(timestamp.hour());
    ClockAngles::from_dial_positions(hour_angle, minute_angle, second_angle, division)
}

/// Recovers the `(hour, minute, second)` time of day from dial angles.
///
/// Each hand angle is floored back to the unit it represents. The division
/// then lifts the 12-hour dial reading onto the 24-hour clock: an hour hand
/// at 0° means 12 (noon) under `Pm` and 0 (midnight) under `Am` — the angle
/// alone cannot tell the two apart.
pub fn to_time(angles: ClockAngles) -> (u8, u8, u8) {
    let mut hour = (angles.hour_angle() / DEGREES_PER_HOUR).floor() as u8 % HOURS_ON_DIAL;
    let minute = (angles.minute_angle() / DEGREES_PER_MINUTE).floor() as u8;
    let second = (angles.second_angle() / DEGREES_PER_SECOND).floor() as u8;

    if angles.division() == DayNightDivision::Pm && hour != HOURS_ON_DIAL {
        hour += HOURS_ON_DIAL;
    }
    if angles.division() == DayNightDivision::Am && hour == HOURS_ON_DIAL {
        hour = MIDNIGHT_HOUR;
    }

    (hour, minute, second)
}
