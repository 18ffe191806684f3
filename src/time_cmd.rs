//! Time command: hand angles -> time of day.

use anyhow::Result;
use tracing::{info, info_span};

use horae_angles::{to_time, ClockAngles};

use crate::cli::TimeArgs;
use crate::parse;

/// Run the angles-to-time conversion.
pub fn run(args: TimeArgs) -> Result<()> {
    let _cmd = info_span!("time").entered();

    let division = parse::parse_division(&args.division)?;
    let angles = ClockAngles::new(
        args.hour_angle,
        args.minute_angle,
        args.second_angle,
        division,
    )?;
    info!(
        hour_angle = angles.hour_angle(),
        minute_angle = angles.minute_angle(),
        second_angle = angles.second_angle(),
        division = %angles.division(),
        "angles validated"
    );

    let (hour, minute, second) = to_time(angles);
    println!("{hour:02}:{minute:02}:{second:02}");

    Ok(())
}
