mod database;
mod export;
mod generate;
mod generator;
mod log;

pub use database::DatabaseConfig;
pub use export::ExportConfig;
pub use generate::GenerateConfig;
pub use generator::GeneratorConfig;
pub use log::{LogConfig, LogFormat, LogLevel, LogOutput};

pub const VG_PREFIX: &str = "VG";
pub const DEFAULT_CONFIG_FILE_PATH: &str = "vitalgen.toml";
