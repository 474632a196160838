use crate::error::StoreError;
use crate::log::SCHEMA;
use crate::model::ReadingKind;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use tracing::{debug, info};

///
/// Kind name to `reading_type.id`, loaded once per run.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingTypeMap(HashMap<ReadingKind, i64>);

impl ReadingTypeMap {
    pub fn id_for(&self, kind: ReadingKind) -> Result<i64, StoreError> {
        self.0
            .get(&kind)
            .copied()
            .ok_or_else(|| StoreError::UnknownReadingType {
                name: kind.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// Adds any missing kind names. Existing rows keep their ids.
/// Returns the number of rows inserted.
///
pub fn ensure(conn: &Connection) -> Result<usize, StoreError> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO reading_type (name) VALUES (?1)")?;

    let mut inserted = 0;
    for kind in ReadingKind::ALL {
        inserted += stmt.execute(params![kind.as_str()])?;
    }

    if inserted == ReadingKind::ALL.len() {
        info!(target: SCHEMA, msg = "Inserted extended reading types");
    } else if inserted > 0 {
        info!(target: SCHEMA, msg = "Completed reading types", inserted);
    } else {
        debug!(target: SCHEMA, msg = "Reading types already present");
    }

    Ok(inserted)
}

///
/// Rows with names outside the fixed kinds are skipped.
///
pub fn load(conn: &Connection) -> Result<ReadingTypeMap, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM reading_type")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut map = HashMap::new();
    for row in rows {
        let (id, name) = row?;
        match name.parse::<ReadingKind>() {
            Ok(kind) => {
                map.insert(kind, id);
            }
            Err(_) => {
                debug!(target: SCHEMA, msg = "Skipping reading type", id, name);
            }
        }
    }

    Ok(ReadingTypeMap(map))
}
