//! # horae-angles
//!
//! Pure conversion between calendar timestamps and analog dial angles.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Timestamp (validated)"] -->|"to_angles()"| B["ClockAngles"]
//!     B -->|"to_time()"| C["(hour, minute, second)"]
//!     D["raw degrees"] -->|"ClockAngles::new()"| B
//!     E["hour 0..=23"] -->|"DayNightDivision::from_hour()"| F["Am / Pm"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use horae_angles::{to_angles, to_time, ClockAngles, DayNightDivision, Timestamp};
//!
//! // Timestamp -> dial angles
//! let ts = Timestamp::new(2024, 11, 5, 15, 30, 45)?;
//! let angles = to_angles(ts);
//! assert_eq!(angles.hour_angle(), 90.0);
//!
//! // Dial angles -> time of day
//! let angles = ClockAngles::new(0.0, 0.0, 0.0, DayNightDivision::Pm)?;
//! assert_eq!(to_time(angles), (12, 0, 0)); // noon, not midnight
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestamp` | Validated calendar timestamp and month-length helpers |
//! | `division` | AM/PM day/night division |
//! | `angles` | Dial angle value type |
//! | `convert` | Dial constants and the two conversion functions |
//! | `error` | Error types |

mod angles;
mod convert;
mod division;
mod error;
mod timestamp;

pub use angles::ClockAngles;
pub use convert::{
    to_angles, to_time, DEGREES_PER_HOUR, DEGREES_PER_MINUTE, DEGREES_PER_SECOND, HOURS_ON_DIAL,
    MIDNIGHT_HOUR,
};
pub use division::DayNightDivision;
pub use error::ClockError;
pub use timestamp::{days_in_month, is_leap_year, Timestamp};
