use super::{parse_or, parse_target};
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::generate::{self, Summary};

#[derive(clap::Args, Clone, Debug)]
#[command(about)]
///
/// Generate patient identity records
///
pub struct Patients {
    ///
    /// Backend: sqlite or json
    ///
    pub command: String,

    ///
    /// Number of patients. Falls back to generate.count when missing or not a number
    ///
    #[arg(allow_negative_numbers = true)]
    pub count: Option<String>,
}

impl Patients {
    pub fn run(&self, config: &GeneratorConfig) -> Result<Summary, Error> {
        let target = parse_target(&self.command)?;
        let count = parse_or(self.count.as_deref(), config.generate.count);

        generate::patients(config, target, count)
    }
}
