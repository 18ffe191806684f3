//! # horae-clock
//!
//! Analog clock state and its timestamp-facing adapter.
//!
//! [`AnalogClock`] holds a date and raw hand angles without interpreting
//! them; [`DigitalClock`] composes that holder with the pure conversion
//! functions from `horae-angles` so callers can work in timestamps while
//! the state stays angular.
//!
//! ## Quick Start
//!
//! ```ignore
//! use horae_angles::Timestamp;
//! use horae_clock::DigitalClock;
//!
//! let mut clock = DigitalClock::new();
//! clock.set_date_time(Timestamp::new(2024, 11, 5, 15, 30, 45)?);
//!
//! assert_eq!(clock.hour_angle(), 90.0);
//! assert_eq!(clock.date_time()?.hour(), 15);
//! ```

mod adapter;
mod analog;

pub use adapter::DigitalClock;
pub use analog::AnalogClock;
