use serde::Deserialize;

/// Top-level Horae configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HoraeConfig {
    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output formatting settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places used when printing angles.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Print the round-tripped date and time before the angles.
    #[serde(default = "default_true")]
    pub show_date: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_date: true,
        }
    }
}

fn default_precision() -> usize {
    0
}
fn default_true() -> bool {
    true
}
