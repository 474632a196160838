#![allow(dead_code)]

use rand::Rng;
use rusqlite::Connection;
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::{filter::Directive, EnvFilter, FmtSubscriber};
use vitalgen::config::{DatabaseConfig, GeneratorConfig};

static INIT: Once = Once::new();

pub fn trace() {
    INIT.call_once(|| {
        let log_level: Directive = tracing::Level::DEBUG.into();

        let filter = EnvFilter::from_default_env().add_directive(log_level.to_owned());

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_test_writer()
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

///
/// Config with every output inside a fresh temp directory.
/// The directory is removed when the workspace is dropped.
///
pub struct Workspace {
    pub dir: TempDir,
    pub config: GeneratorConfig,
}

pub fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();

    let mut config = GeneratorConfig::default();
    config.database = DatabaseConfig::with_path(dir.path().join("patients.db"));
    config.export.patients_file = dir.path().join("patients.json");
    config.export.observations_file = dir.path().join("observations.json");

    Workspace { dir, config }
}

pub fn connect(config: &GeneratorConfig) -> Connection {
    Connection::open(&config.database.path).unwrap()
}

pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

pub fn random_count() -> u32 {
    rand::rng().random_range(5..=25)
}
