use clap::Parser;
use tracing::{error, info};
use vitalgen::cli::{self, Args};
use vitalgen::config::GeneratorConfig;
use vitalgen::log::{self, CONFIG};
use vitalgen::VERSION;

fn main() {
    let args = Args::parse();

    let config = match GeneratorConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration Error: {}", err);
            std::process::exit(exitcode::CONFIG);
        }
    };

    log::init(config.log.clone());

    info!(msg = "vitalgen", version = VERSION);
    info!(
        target: CONFIG,
        msg = "Loaded configuration",
        database = ?config.database.path,
        seed = ?config.generate.seed
    );

    if let Err(err) = cli::run(args, config) {
        error!(msg = "Generation failed", error = err.to_string());
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
