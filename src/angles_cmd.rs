//! Angles command: timestamp -> hand angles.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use horae_clock::DigitalClock;

use crate::cli::AnglesArgs;
use crate::config::HoraeConfig;
use crate::parse;

/// Run the timestamp-to-angles conversion.
pub fn run(args: AnglesArgs) -> Result<()> {
    let _cmd = info_span!("angles").entered();

    // 1. Load optional TOML config
    let config = match args.config {
        Some(ref path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => HoraeConfig::default(),
    };

    // 2. Parse and validate the timestamp
    let timestamp = parse::parse_datetime(&args.datetime)?;
    info!(%timestamp, "timestamp parsed");

    // 3. Convert to hand angles and store
    let mut clock = DigitalClock::new();
    clock.set_date_time(timestamp);

    // 4. Round-trip back through the stored angles
    let round_tripped = clock
        .date_time()
        .context("failed to recover timestamp from stored angles")?;

    let precision = config.output.precision;
    if config.output.show_date {
        println!("time:        {round_tripped}");
    }
    println!("hour hand:   {:.precision$}°", clock.hour_angle());
    println!("minute hand: {:.precision$}°", clock.minute_angle());
    println!("second hand: {:.precision$}°", clock.second_angle());
    println!("division:    {}", clock.division());

    Ok(())
}
