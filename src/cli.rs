use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Horae clock-hand angle converter.
#[derive(Parser)]
#[command(
    name = "horae",
    version,
    about = "Convert calendar timestamps to clock-hand angles and back"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a timestamp to hand angles on the 12-hour dial.
    Angles(AnglesArgs),
    /// Recover the time of day from hand angles.
    Time(TimeArgs),
}

/// Arguments for the `angles` subcommand.
#[derive(clap::Args)]
pub struct AnglesArgs {
    /// Date and time in `YYYY-MM-DD HH:MM:SS` format.
    pub datetime: String,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `time` subcommand.
#[derive(clap::Args)]
pub struct TimeArgs {
    /// Hour hand angle in degrees.
    #[arg(long, visible_alias = "ha")]
    pub hour_angle: f64,

    /// Minute hand angle in degrees.
    #[arg(long, visible_alias = "ma")]
    pub minute_angle: f64,

    /// Second hand angle in degrees.
    #[arg(long, visible_alias = "sa")]
    pub second_angle: f64,

    /// Day/night division: `am` or `pm`.
    #[arg(short, long)]
    pub division: String,
}
