pub mod score;

use crate::log::SYNTH;
use crate::model::{Measurement, Observation, Reading, ReadingKind};
use chrono::{Local, NaiveDateTime, SubsecRound, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

pub const DEFAULT_LOOKBACK_MINUTES: u32 = 200;

///
/// One raw set of vital signs, before scoring.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VitalSigns {
    pub temperature: f64,
    pub respiratory_rate: i64,
    pub heart_rate: i64,
    pub blood_pressure_systolic: i64,
    pub blood_pressure_diastolic: i64,
    pub oxygen_saturation: i64,
    pub consciousness_level: i64,
}

impl VitalSigns {
    ///
    /// Scored readings in emission order.
    /// The combined blood pressure score lands on the diastolic reading.
    ///
    pub fn readings(&self) -> Vec<Reading> {
        let bp_score = score::blood_pressure(self.blood_pressure_systolic, self.blood_pressure_diastolic);

        ReadingKind::ALL
            .into_iter()
            .map(|kind| {
                let (value, score) = match kind {
                    ReadingKind::Temperature => (
                        Measurement::Decimal(self.temperature),
                        score::temperature(self.temperature),
                    ),
                    ReadingKind::RespiratoryRate => (
                        Measurement::Integer(self.respiratory_rate),
                        score::respiratory_rate(self.respiratory_rate),
                    ),
                    ReadingKind::HeartRate => (
                        Measurement::Integer(self.heart_rate),
                        score::heart_rate(self.heart_rate),
                    ),
                    ReadingKind::BloodPressureSystolic => {
                        (Measurement::Integer(self.blood_pressure_systolic), 0)
                    }
                    ReadingKind::BloodPressureDiastolic => {
                        (Measurement::Integer(self.blood_pressure_diastolic), bp_score)
                    }
                    ReadingKind::OxygenSaturation => (
                        Measurement::Integer(self.oxygen_saturation),
                        score::oxygen_saturation(self.oxygen_saturation),
                    ),
                    ReadingKind::ConsciousnessLevel => (
                        Measurement::Integer(self.consciousness_level),
                        score::consciousness_level(self.consciousness_level),
                    ),
                };
                Reading { kind, value, score }
            })
            .collect()
    }

    pub fn observe(&self, pat_no: &str, timestamp: NaiveDateTime) -> Observation {
        let readings = self.readings();
        let total_score = readings.iter().map(|r| r.score).sum();

        Observation {
            id: None,
            pat_no: pat_no.to_owned(),
            timestamp,
            total_score,
            readings,
        }
    }
}

///
/// Draws vital signs and observation timestamps from a random source.
///
/// Seed the source to make a run reproducible:
/// the same seed and the same "now" yield the same observations.
///
#[derive(Debug)]
pub struct Synthesizer<R: Rng = StdRng> {
    rng: R,
}

impl Synthesizer<StdRng> {
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Synthesizer { rng }
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(rng: R) -> Self {
        Synthesizer { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn vital_signs(&mut self) -> VitalSigns {
        let rng = &mut self.rng;

        let temperature = rng.random_range(35.0..=40.0_f64);

        VitalSigns {
            temperature: (temperature * 10.0).round() / 10.0,
            respiratory_rate: rng.random_range(12..=30),
            heart_rate: rng.random_range(60..=140),
            blood_pressure_systolic: rng.random_range(90..=160),
            blood_pressure_diastolic: rng.random_range(60..=100),
            oxygen_saturation: rng.random_range(85..=100),
            consciousness_level: rng.random_range(0..=3),
        }
    }

    ///
    /// A random instant at most `lookback_minutes` before `now`
    ///
    pub fn backdate(&mut self, now: NaiveDateTime, lookback_minutes: u32) -> NaiveDateTime {
        let window = i64::from(lookback_minutes) * 60 * 1_000_000;
        let offset = self.rng.random_range(0..=window);
        now - TimeDelta::microseconds(offset)
    }

    pub fn observation_at(
        &mut self,
        pat_no: &str,
        lookback_minutes: u32,
        now: NaiveDateTime,
    ) -> Observation {
        let vitals = self.vital_signs();
        let timestamp = self.backdate(now, lookback_minutes);
        let observation = vitals.observe(pat_no, timestamp);

        trace!(
            target: SYNTH,
            msg = "Synthesized observation",
            pat_no,
            total_score = observation.total_score,
            ?vitals
        );

        observation
    }

    pub fn observation(&mut self, pat_no: &str, lookback_minutes: u32) -> Observation {
        let now = Local::now().naive_local().trunc_subsecs(6);
        self.observation_at(pat_no, lookback_minutes, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pat_no;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn vitals() -> VitalSigns {
        VitalSigns {
            temperature: 38.0,
            respiratory_rate: 26,
            heart_rate: 95,
            blood_pressure_systolic: 150,
            blood_pressure_diastolic: 80,
            oxygen_saturation: 93,
            consciousness_level: 2,
        }
    }

    #[test]
    fn readings_follow_fixed_order() {
        let observation = vitals().observe("PAT00001", now());
        assert_eq!(observation.kinds(), ReadingKind::ALL.to_vec());
    }

    #[test]
    fn scores_hand_picked_vitals() {
        let observation = vitals().observe("PAT00001", now());

        let scores = observation
            .readings
            .iter()
            .map(|r| r.score)
            .collect::<Vec<_>>();

        // temperature, respiratory, heart, systolic, diastolic, oxygen, consciousness
        assert_eq!(scores, vec![1, 2, 0, 0, 1, 1, 2]);
        assert_eq!(observation.total_score, 7);
    }

    #[test]
    fn systolic_never_carries_the_blood_pressure_score() {
        let mut high = vitals();
        high.blood_pressure_systolic = 160;
        high.blood_pressure_diastolic = 100;

        let observation = high.observe("PAT00001", now());

        let systolic = observation
            .reading(ReadingKind::BloodPressureSystolic)
            .unwrap();
        let diastolic = observation
            .reading(ReadingKind::BloodPressureDiastolic)
            .unwrap();

        assert_eq!(systolic.score, 0);
        assert_eq!(diastolic.score, 1);
    }

    #[test]
    fn synthesized_observations_hold_invariants() {
        let mut synth = Synthesizer::seeded(Some(7));

        for i in 1..=500 {
            let observation = synth.observation_at(&pat_no(i), DEFAULT_LOOKBACK_MINUTES, now());

            assert_eq!(observation.kinds(), ReadingKind::ALL.to_vec());

            let sum: u32 = observation.readings.iter().map(|r| r.score).sum();
            assert_eq!(observation.total_score, sum);

            let systolic = observation
                .reading(ReadingKind::BloodPressureSystolic)
                .unwrap();
            assert_eq!(systolic.score, 0);

            let diastolic = observation
                .reading(ReadingKind::BloodPressureDiastolic)
                .unwrap();
            assert!(diastolic.score <= 1);
        }
    }

    #[test]
    fn vital_signs_stay_in_range() {
        let mut synth = Synthesizer::seeded(Some(11));

        for _ in 0..1000 {
            let v = synth.vital_signs();
            assert!((35.0..=40.0).contains(&v.temperature));
            assert_eq!((v.temperature * 10.0).round() / 10.0, v.temperature);
            assert!((12..=30).contains(&v.respiratory_rate));
            assert!((60..=140).contains(&v.heart_rate));
            assert!((90..=160).contains(&v.blood_pressure_systolic));
            assert!((60..=100).contains(&v.blood_pressure_diastolic));
            assert!((85..=100).contains(&v.oxygen_saturation));
            assert!((0..=3).contains(&v.consciousness_level));
        }
    }

    #[test]
    fn timestamp_is_within_lookback_window() {
        let mut synth = Synthesizer::seeded(Some(3));

        for _ in 0..500 {
            let timestamp = synth.backdate(now(), 30);
            assert!(timestamp <= now());
            assert!(timestamp >= now() - TimeDelta::minutes(30));
        }

        assert_eq!(synth.backdate(now(), 0), now());
    }

    #[test]
    fn same_seed_same_observations() {
        let mut a = Synthesizer::seeded(Some(42));
        let mut b = Synthesizer::seeded(Some(42));

        for i in 1..=20 {
            assert_eq!(
                a.observation_at(&pat_no(i), 200, now()),
                b.observation_at(&pat_no(i), 200, now())
            );
        }
    }
}
