use super::{parse_or, parse_target};
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::generate::{self, ObservationRun, Summary};

#[derive(clap::Args, Clone, Debug)]
#[command(about)]
///
/// Generate scored vital-sign observations for random patients
///
pub struct Observations {
    ///
    /// Backend: sqlite or json
    ///
    pub command: String,

    ///
    /// Number of observations. Default from generate.count
    ///
    #[arg(allow_negative_numbers = true)]
    pub count: Option<String>,

    ///
    /// Patient numbers are drawn from PAT00001 up to this many. Default from generate.patient_count
    ///
    #[arg(allow_negative_numbers = true)]
    pub patient_count: Option<String>,

    ///
    /// How far back timestamps may go, in minutes. Default from generate.lookback_minutes
    ///
    #[arg(allow_negative_numbers = true)]
    pub past_minutes: Option<String>,
}

impl Observations {
    pub fn run(&self, config: &GeneratorConfig) -> Result<Summary, Error> {
        let target = parse_target(&self.command)?;

        let defaults = ObservationRun::from(&config.generate);
        let run = ObservationRun {
            count: parse_or(self.count.as_deref(), defaults.count),
            patient_count: parse_or(self.patient_count.as_deref(), defaults.patient_count),
            lookback_minutes: parse_or(self.past_minutes.as_deref(), defaults.lookback_minutes),
        };

        generate::observations(config, target, &run)
    }
}
