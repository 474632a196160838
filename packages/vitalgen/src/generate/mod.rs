use crate::config::{GenerateConfig, GeneratorConfig};
use crate::error::{Error, GenerateError};
use crate::export;
use crate::identity::{FakeIdentity, PatientGenerator};
use crate::log::{EXPORT, STORE, SYNTH};
use crate::model::{pat_no, Observation, Patient};
use crate::store::{self, Store};
use crate::synth::Synthesizer;
use rand::Rng;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

pub const AVAILABLE_COMMANDS: &str = "sqlite, json";

///
/// Backend selected by the command word.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Sqlite,
    Json,
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Target::Sqlite),
            "json" => Ok(Target::Json),
            _ => Err(GenerateError::UnknownCommand {
                command: s.to_owned(),
            }),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Target::Sqlite => "sqlite",
            Target::Json => "json",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservationRun {
    pub count: u32,
    pub patient_count: u32,
    pub lookback_minutes: u32,
}

impl From<&GenerateConfig> for ObservationRun {
    fn from(config: &GenerateConfig) -> Self {
        ObservationRun {
            count: config.count,
            patient_count: config.patient_count,
            lookback_minutes: config.lookback_minutes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Records {
    Patients,
    Observations,
}

///
/// Outcome of one pipeline run.
/// Displays as the line reported to the user.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub records: Records,
    pub target: Target,
    pub count: usize,
    pub destination: PathBuf,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.count;
        let destination = self.destination.display();

        match (self.records, self.target) {
            (Records::Patients, Target::Sqlite) => {
                write!(f, "{count} random patients added to database.")
            }
            (Records::Patients, Target::Json) => {
                write!(f, "{count} random patient records saved to {destination}.")
            }
            (Records::Observations, Target::Sqlite) => {
                write!(f, "{count} random observations added to database.")
            }
            (Records::Observations, Target::Json) => {
                write!(f, "{count} random observations saved to {destination}")
            }
        }
    }
}

pub fn patients(config: &GeneratorConfig, target: Target, count: u32) -> Result<Summary, Error> {
    info!(target: SYNTH, msg = "Generating patients", count, backend = %target);

    let identity = FakeIdentity::seeded(config.generate.seed);
    let patients = PatientGenerator::new(identity).take(count as usize);

    let (count, destination) = match target {
        Target::Sqlite => {
            let written = patients_to_store(config, patients)?;
            (written, config.database.path.to_owned())
        }
        Target::Json => {
            let patients = patients.collect::<Vec<_>>();
            let path = &config.export.patients_file;
            export::write_patients(path, &patients)?;
            info!(target: EXPORT, msg = "Saved patients", count = patients.len(), ?path);
            (patients.len(), path.to_owned())
        }
    };

    Ok(Summary {
        records: Records::Patients,
        target,
        count,
        destination,
    })
}

fn patients_to_store(
    config: &GeneratorConfig,
    patients: impl Iterator<Item = Patient>,
) -> Result<usize, Error> {
    let mut store = Store::open(&config.database)?;
    store.prepare_patients()?;

    let tx = store.transaction()?;

    let mut written = 0;
    for patient in patients {
        store::insert_patient(&tx, &patient)?;
        written += 1;
    }

    tx.commit()?;
    info!(target: STORE, msg = "Committed patients", count = written);

    Ok(written)
}

pub fn observations(
    config: &GeneratorConfig,
    target: Target,
    run: &ObservationRun,
) -> Result<Summary, Error> {
    if run.patient_count == 0 {
        return Err(GenerateError::EmptyPatientPool.into());
    }

    info!(
        target: SYNTH,
        msg = "Generating observations",
        count = run.count,
        patient_count = run.patient_count,
        lookback_minutes = run.lookback_minutes,
        backend = %target
    );

    let mut synth = Synthesizer::seeded(config.generate.seed);

    let observations = (0..run.count).map(move |_| {
        let index = synth.rng().random_range(1..=run.patient_count);
        synth.observation(&pat_no(index), run.lookback_minutes)
    });

    let (count, destination) = match target {
        Target::Sqlite => {
            let written = observations_to_store(config, observations)?;
            (written, config.database.path.to_owned())
        }
        Target::Json => {
            let observations = observations.collect::<Vec<_>>();
            let path = &config.export.observations_file;
            export::write_observations(path, &observations)?;
            info!(target: EXPORT, msg = "Saved observations", count = observations.len(), ?path);
            (observations.len(), path.to_owned())
        }
    };

    Ok(Summary {
        records: Records::Observations,
        target,
        count,
        destination,
    })
}

fn observations_to_store(
    config: &GeneratorConfig,
    observations: impl Iterator<Item = Observation>,
) -> Result<usize, Error> {
    let mut store = Store::open(&config.database)?;
    let reading_types = store.prepare_observations()?;

    let tx = store.transaction()?;

    let mut written = 0;
    for observation in observations {
        let id = store::insert_observation(&tx, &reading_types, &observation)?;
        debug!(target: STORE, msg = "Stored observation", id, pat_no = observation.pat_no);
        written += 1;
    }

    tx.commit()?;
    info!(target: STORE, msg = "Committed observations", count = written);

    Ok(written)
}
