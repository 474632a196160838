use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value} for {name}")]
    InvalidParameter { name: String, value: String },

    #[error("Missing field {name} from configuration file or environment")]
    MissingParameter { name: String },

    #[error(transparent)]
    FileOrEnvironment(#[from] config::ConfigError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    #[error("Reading type {name} has no row in reading_type")]
    UnknownReadingType { name: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not access {path}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Document in {path} could not be encoded or decoded")]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Patient pool is empty. Observations need at least one patient number to reference")]
    EmptyPatientPool,

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },
}

impl Error {
    ///
    /// Process exit status for a failed run
    ///
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Error::Config(_) => exitcode::CONFIG,
            Error::Export(_) => exitcode::IOERR,
            Error::Generate(_) => exitcode::DATAERR,
            Error::Store(_) => exitcode::DATAERR,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.into())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Store(e.into())
    }
}
