mod observations;
mod patients;

use crate::{
    config::{GeneratorConfig, LogConfig, LogFormat, LogLevel, DEFAULT_CONFIG_FILE_PATH},
    error::{Error, GenerateError},
    generate::{Summary, Target, AVAILABLE_COMMANDS},
    log::DEVELOPMENT,
};
use clap::{Parser, Subcommand};
use tracing::debug;

pub use observations::Observations;
pub use patients::Patients;

#[derive(Clone, Debug, Parser)]
#[command(version, about, verbatim_doc_comment)]
///
/// vitalgen
///
/// Synthesizes patient records and scored vital-sign observations for tests and demos,
/// written to a SQLite database or to JSON files.
///
pub struct Args {
    /// Optional path to a vitalgen configuration file.
    ///
    /// Default is "vitalgen.toml".
    /// Configuration is loaded from this file, if present.
    /// Environment variables prefixed with VG_ override any values defined in the file.
    #[arg(short = 'p', long, default_value = DEFAULT_CONFIG_FILE_PATH, verbatim_doc_comment, global = true)]
    pub config_file_path: String,

    ///
    /// Optional log level.
    ///
    #[arg(short, long, value_enum, default_value_t = LogConfig::default_log_level(), env = "VG_LOG__LEVEL", global = true)]
    pub log_level: LogLevel,

    ///
    /// Optional log format. Default is "pretty" if running in a terminal session, otherwise "structured".
    ///
    #[arg(short='f', long, value_enum, default_value_t = LogConfig::default_log_format(), env = "VG_LOG__FORMAT", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    Patients(Patients),
    Observations(Observations),
}

///
/// What a command did
///
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Generated(Summary),
    UnknownCommand(String),
}

impl Commands {
    pub fn dispatch(&self, config: &GeneratorConfig) -> Result<Outcome, Error> {
        debug!(target: DEVELOPMENT, command = ?self);

        let outcome = match self {
            Commands::Patients(patients) => patients.run(config),
            Commands::Observations(observations) => observations.run(config),
        };

        match outcome {
            Err(Error::Generate(GenerateError::UnknownCommand { command })) => {
                Ok(Outcome::UnknownCommand(command))
            }
            Ok(summary) => Ok(Outcome::Generated(summary)),
            Err(err) => Err(err),
        }
    }
}

///
/// Runs the command specified on the command line and reports the result.
/// An unknown backend word is reported and is not an error.
///
pub fn run(args: Args, config: GeneratorConfig) -> Result<Outcome, Error> {
    let outcome = args.command.dispatch(&config)?;

    match &outcome {
        Outcome::Generated(summary) => println!("{summary}"),
        Outcome::UnknownCommand(command) => {
            println!("Unknown command: {command}");
            println!("Available commands: {AVAILABLE_COMMANDS}");
        }
    }

    Ok(outcome)
}

pub(crate) fn parse_target(command: &str) -> Result<Target, Error> {
    Ok(command.parse::<Target>()?)
}

///
/// Numeric positional with a fallback.
/// Anything that does not parse as a count uses the default.
///
pub(crate) fn parse_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::generate::Records;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.database = DatabaseConfig::with_path(dir.join("patients.db"));
        config.export.patients_file = dir.join("patients.json");
        config.export.observations_file = dir.join("observations.json");
        config
    }

    #[test]
    fn parse_or_falls_back() {
        assert_eq!(parse_or(Some("25"), 100), 25);
        assert_eq!(parse_or(Some("0"), 100), 0);
        assert_eq!(parse_or(Some("ten"), 100), 100);
        assert_eq!(parse_or(Some("2.5"), 100), 100);
        assert_eq!(parse_or(Some("-5"), 100), 100);
        assert_eq!(parse_or(Some(""), 100), 100);
        assert_eq!(parse_or(None, 200), 200);
    }

    #[test]
    fn parses_observation_positionals() {
        let args = Args::try_parse_from([
            "vitalgen",
            "observations",
            "json",
            "5",
            "10",
            "30",
        ])
        .unwrap();

        match args.command {
            Commands::Observations(observations) => {
                assert_eq!(observations.command, "json");
                assert_eq!(observations.count.as_deref(), Some("5"));
                assert_eq!(observations.patient_count.as_deref(), Some("10"));
                assert_eq!(observations.past_minutes.as_deref(), Some("30"));
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_counts_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.generate.count = 6;
        config.generate.patient_count = 2;

        let args = Args::try_parse_from(["vitalgen", "observations", "json", "-5", "-1"]).unwrap();

        match &args.command {
            Commands::Observations(observations) => {
                assert_eq!(observations.count.as_deref(), Some("-5"));
                assert_eq!(observations.patient_count.as_deref(), Some("-1"));
            }
            other => panic!("Unexpected command {other:?}"),
        }

        match args.command.dispatch(&config).unwrap() {
            Outcome::Generated(summary) => assert_eq!(summary.count, 6),
            other => panic!("Unexpected outcome {other:?}"),
        }

        let args = Args::try_parse_from(["vitalgen", "patients", "sqlite", "-3"]).unwrap();
        match args.command {
            Commands::Patients(patients) => {
                assert_eq!(parse_or(patients.count.as_deref(), 100), 100);
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "vitalgen",
            "patients",
            "sqlite",
            "3",
            "-p",
            "other.toml",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config_file_path, "other.toml");
        assert_eq!(args.log_level, LogLevel::Debug);
        assert!(matches!(args.command, Commands::Patients(_)));
    }

    #[test]
    fn unknown_command_touches_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let args = Args::try_parse_from(["vitalgen", "observations", "foo"]).unwrap();
        let outcome = args.command.dispatch(&config).unwrap();

        assert_eq!(outcome, Outcome::UnknownCommand("foo".to_string()));
        assert!(!config.database.path.exists());
        assert!(!config.export.observations_file.exists());
    }

    #[test]
    fn patients_json_uses_positional_count() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let args = Args::try_parse_from(["vitalgen", "patients", "json", "4"]).unwrap();
        let outcome = args.command.dispatch(&config).unwrap();

        match outcome {
            Outcome::Generated(summary) => {
                assert_eq!(summary.records, Records::Patients);
                assert_eq!(summary.count, 4);
                assert_eq!(summary.destination, config.export.patients_file);
            }
            other => panic!("Unexpected outcome {other:?}"),
        }
    }
}
