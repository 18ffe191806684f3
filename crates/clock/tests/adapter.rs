use approx::assert_abs_diff_eq;

use horae_angles::{ClockError, DayNightDivision, Timestamp};
use horae_clock::DigitalClock;

#[test]
fn afternoon_reference_angles() {
    let mut clock = DigitalClock::new();
    clock.set_date_time(Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap());

    assert_abs_diff_eq!(clock.hour_angle(), 90.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.minute_angle(), 180.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.second_angle(), 270.0, epsilon = 1e-12);
    assert_eq!(clock.division(), DayNightDivision::Pm);
}

#[test]
fn round_trip_preserves_timestamp() {
    let ts = Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap();
    let mut clock = DigitalClock::new();
    clock.set_date_time(ts);
    assert_eq!(clock.date_time().unwrap(), ts);
}

#[test]
fn round_trip_every_hour() {
    let mut clock = DigitalClock::new();
    for hour in 0..24u8 {
        let ts = Timestamp::new(2024, 2, 29, hour, 59, 1).unwrap();
        clock.set_date_time(ts);
        assert_eq!(
            clock.date_time().unwrap(),
            ts,
            "round trip failed for hour {hour}"
        );
    }
}

#[test]
fn midnight_angles_all_zero() {
    let mut clock = DigitalClock::new();
    clock.set_date_time(Timestamp::new(2024, 11, 5, 0, 0, 0).unwrap());

    assert_abs_diff_eq!(clock.hour_angle(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.minute_angle(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.second_angle(), 0.0, epsilon = 1e-12);
    assert_eq!(clock.division(), DayNightDivision::Am);
    assert_eq!(clock.date_time().unwrap().hour(), 0);
}

#[test]
fn noon_angles_all_zero() {
    let mut clock = DigitalClock::new();
    clock.set_date_time(Timestamp::new(2024, 11, 5, 12, 0, 0).unwrap());

    assert_abs_diff_eq!(clock.hour_angle(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.minute_angle(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.second_angle(), 0.0, epsilon = 1e-12);
    assert_eq!(clock.division(), DayNightDivision::Pm);
    assert_eq!(clock.date_time().unwrap().hour(), 12);
}

#[test]
fn rejected_input_leaves_state_unchanged() {
    let ts = Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap();
    let mut clock = DigitalClock::new();
    clock.set_date_time(ts);

    // An ill-formed timestamp never reaches the clock: construction fails
    // first, and the stored state is exactly what it was.
    let err = Timestamp::new(2024, 2, 30, 15, 30, 45).unwrap_err();
    assert_eq!(
        err,
        ClockError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        }
    );
    assert_eq!(clock.date_time().unwrap(), ts);
    assert_abs_diff_eq!(clock.hour_angle(), 90.0, epsilon = 1e-12);
}

#[test]
fn unset_clock_errors_on_read() {
    let clock = DigitalClock::new();
    assert_eq!(
        clock.date_time().unwrap_err(),
        ClockError::InvalidMonth { month: 0 }
    );
}

#[test]
fn set_overwrites_previous_state() {
    let mut clock = DigitalClock::new();
    clock.set_date_time(Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap());
    clock.set_date_time(Timestamp::new(1999, 12, 31, 4, 5, 6).unwrap());

    let ts = clock.date_time().unwrap();
    assert_eq!(ts, Timestamp::new(1999, 12, 31, 4, 5, 6).unwrap());
    assert_abs_diff_eq!(clock.hour_angle(), 120.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.minute_angle(), 30.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clock.second_angle(), 36.0, epsilon = 1e-12);
    assert_eq!(clock.division(), DayNightDivision::Am);
}

#[test]
fn tampered_angle_surfaces_as_error() {
    let mut clock = DigitalClock::new();
    clock.set_date_time(Timestamp::new(2024, 11, 5, 15, 30, 45).unwrap());
    clock
        .analog_mut()
        .set_date_time(2024, 11, 5, 90.0, 360.0, 270.0, DayNightDivision::Pm);
    assert_eq!(
        clock.date_time().unwrap_err(),
        ClockError::InvalidAngle { angle: 360.0 }
    );
}
