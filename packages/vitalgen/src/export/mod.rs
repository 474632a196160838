use crate::error::ExportError;
use crate::log::EXPORT;
use crate::model::{Observation, Patient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const INDENT: &[u8] = b"    ";

pub fn write_patients(path: impl AsRef<Path>, patients: &[Patient]) -> Result<(), ExportError> {
    write_documents(path.as_ref(), patients)
}

pub fn write_observations(
    path: impl AsRef<Path>,
    observations: &[Observation],
) -> Result<(), ExportError> {
    write_documents(path.as_ref(), observations)
}

pub fn read_patients(path: impl AsRef<Path>) -> Result<Vec<Patient>, ExportError> {
    read_documents(path.as_ref())
}

pub fn read_observations(path: impl AsRef<Path>) -> Result<Vec<Observation>, ExportError> {
    read_documents(path.as_ref())
}

///
/// Writes `documents` as one pretty-printed JSON array, replacing any existing file.
///
fn write_documents<T: Serialize>(path: &Path, documents: &[T]) -> Result<(), ExportError> {
    let file_error = |source| ExportError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(file_error)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);

    documents
        .serialize(&mut serializer)
        .map_err(|source| ExportError::Document {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(file_error)?;

    debug!(target: EXPORT, msg = "Wrote documents", count = documents.len(), ?path);
    Ok(())
}

fn read_documents<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let documents: Vec<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::Document {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(target: EXPORT, msg = "Read documents", count = documents.len(), ?path);
    Ok(documents)
}
