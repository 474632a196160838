use crate::synth::DEFAULT_LOOKBACK_MINUTES;
use serde::Deserialize;

///
/// Defaults for the numeric command line arguments.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GenerateConfig {
    #[serde(default = "GenerateConfig::default_count")]
    pub count: u32,

    /// Observations pick patient numbers from `1..=patient_count`
    #[serde(default = "GenerateConfig::default_patient_count")]
    pub patient_count: u32,

    #[serde(default = "GenerateConfig::default_lookback_minutes")]
    pub lookback_minutes: u32,

    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateConfig {
    pub const fn default_count() -> u32 {
        100
    }

    pub const fn default_patient_count() -> u32 {
        100
    }

    pub const fn default_lookback_minutes() -> u32 {
        DEFAULT_LOOKBACK_MINUTES
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            count: GenerateConfig::default_count(),
            patient_count: GenerateConfig::default_patient_count(),
            lookback_minutes: GenerateConfig::default_lookback_minutes(),
            seed: None,
        }
    }
}
