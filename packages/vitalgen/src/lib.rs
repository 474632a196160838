pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod identity;
pub mod log;
pub mod model;
pub mod store;
pub mod synth;

pub use crate::cli::Args;
pub use crate::config::{DatabaseConfig, GeneratorConfig};
pub use crate::generate::{ObservationRun, Summary, Target};
pub use crate::log::init;
pub use crate::model::{Observation, Patient, Reading, ReadingKind};
pub use crate::store::{ReadingTypeMap, Store};
pub use crate::synth::Synthesizer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub mod test_helpers;
