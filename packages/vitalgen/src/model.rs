use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub const PAT_NO_PREFIX: &str = "PAT";

/// Observation timestamps always carry six fractional digits
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

///
/// Patient number for a 1-based sequence index.
/// Zero-padded to five digits, wider indexes keep all their digits.
///
pub fn pat_no(index: u32) -> String {
    format!("{PAT_NO_PREFIX}{index:05}")
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Patient {
    pub pat_no: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub address: String,
}

///
/// The seven vital-sign kinds, declared in emission order.
///
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReadingKind {
    Temperature,
    RespiratoryRate,
    HeartRate,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    OxygenSaturation,
    ConsciousnessLevel,
}

impl ReadingKind {
    pub const ALL: [ReadingKind; 7] = [
        ReadingKind::Temperature,
        ReadingKind::RespiratoryRate,
        ReadingKind::HeartRate,
        ReadingKind::BloodPressureSystolic,
        ReadingKind::BloodPressureDiastolic,
        ReadingKind::OxygenSaturation,
        ReadingKind::ConsciousnessLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Temperature => "temperature",
            ReadingKind::RespiratoryRate => "respiratory_rate",
            ReadingKind::HeartRate => "heart_rate",
            ReadingKind::BloodPressureSystolic => "blood_pressure_systolic",
            ReadingKind::BloodPressureDiastolic => "blood_pressure_diastolic",
            ReadingKind::OxygenSaturation => "oxygen_saturation",
            ReadingKind::ConsciousnessLevel => "consciousness_level",
        }
    }
}

impl Display for ReadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownReadingKind(pub String);

impl FromStr for ReadingKind {
    type Err = UnknownReadingKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownReadingKind(s.to_owned()))
    }
}

///
/// Numeric reading value.
/// Temperature is the only decimal kind, everything else is a whole number and
/// is written to documents without a fractional part.
///
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Measurement {
    Integer(i64),
    Decimal(f64),
}

impl Measurement {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Measurement::Integer(i) => i as f64,
            Measurement::Decimal(d) => d,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Reading {
    #[serde(rename = "type")]
    pub kind: ReadingKind,
    pub value: Measurement,
    pub score: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Observation {
    /// Assigned by the relational store, never part of the document form
    #[serde(skip)]
    pub id: Option<i64>,
    pub pat_no: String,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub total_score: u32,
    pub readings: Vec<Reading>,
}

impl Observation {
    pub fn reading(&self, kind: ReadingKind) -> Option<&Reading> {
        self.readings.iter().find(|r| r.kind == kind)
    }

    pub fn kinds(&self) -> Vec<ReadingKind> {
        self.readings.iter().map(|r| r.kind).collect()
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    // Reads any fractional precision, including none
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f").map_err(de::Error::custom)
    }
}
