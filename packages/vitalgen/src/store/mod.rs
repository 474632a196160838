mod reading_type;

pub use reading_type::ReadingTypeMap;

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::log::{SCHEMA, STORE};
use crate::model::{Observation, Patient, TIMESTAMP_FORMAT};
use rusqlite::{params, Connection, Transaction};
use tracing::{debug, trace};

const PATIENT_SCHEMA: &str = include_str!("sql/patient.sql");
const OBSERVATION_SCHEMA: &str = include_str!("sql/observation.sql");

///
/// Relational backend on a single SQLite connection.
///
/// Setup (`prepare_*`) runs outside the run transaction, so schema and
/// reading types survive a failed run.
///
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        debug!(target: STORE, msg = "Opening database", path = ?config.path);
        let conn = Connection::open(&config.path)?;
        Store::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Store::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Store { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn prepare_patients(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(PATIENT_SCHEMA)?;
        debug!(target: SCHEMA, msg = "Patient schema ready");
        Ok(())
    }

    ///
    /// Creates the observation tables, completes the reading types and
    /// returns their ids for the run.
    ///
    pub fn prepare_observations(&self) -> Result<ReadingTypeMap, StoreError> {
        self.conn.execute_batch(OBSERVATION_SCHEMA)?;
        debug!(target: SCHEMA, msg = "Observation schema ready");

        reading_type::ensure(&self.conn)?;
        reading_type::load(&self.conn)
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>, StoreError> {
        Ok(self.conn.transaction()?)
    }
}

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO patient (pat_no, name, gender, birth_date, address) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            patient.pat_no,
            patient.name,
            patient.gender.as_str(),
            patient.birth_date.to_string(),
            patient.address,
        ],
    )?;

    trace!(target: STORE, msg = "Inserted patient", pat_no = patient.pat_no);
    Ok(())
}

///
/// Writes the observation row and its readings.
/// Returns the id assigned to the observation.
///
pub fn insert_observation(
    conn: &Connection,
    reading_types: &ReadingTypeMap,
    observation: &Observation,
) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO observation (pat_no, timestamp, total_score) VALUES (?1, ?2, ?3)",
        params![
            observation.pat_no,
            observation.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            observation.total_score,
        ],
    )?;
    let observation_id = conn.last_insert_rowid();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO reading (observation_id, reading_type_id, value, score) VALUES (?1, ?2, ?3, ?4)",
    )?;

    for reading in &observation.readings {
        let reading_type_id = reading_types.id_for(reading.kind)?;
        stmt.execute(params![
            observation_id,
            reading_type_id,
            reading.value.as_f64(),
            reading.score,
        ])?;
    }

    trace!(
        target: STORE,
        msg = "Inserted observation",
        observation_id,
        pat_no = observation.pat_no
    );

    Ok(observation_id)
}
