use crate::model::{pat_no, Gender, Patient};
use chrono::{Days, Local, Months, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_AGE_YEARS: u32 = 18;
pub const MAX_AGE_YEARS: u32 = 90;

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub address: String,
}

pub trait IdentityProvider {
    fn generate_person(&mut self) -> Person;
}

///
/// Identities drawn from the `fake` English locale.
///
/// Gender is drawn independently of the name.
///
#[derive(Debug)]
pub struct FakeIdentity<R: Rng = StdRng> {
    rng: R,
    today: NaiveDate,
}

impl FakeIdentity<StdRng> {
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        FakeIdentity::new(rng)
    }
}

impl<R: Rng> FakeIdentity<R> {
    pub fn new(rng: R) -> Self {
        FakeIdentity::with_today(rng, Local::now().date_naive())
    }

    pub fn with_today(rng: R, today: NaiveDate) -> Self {
        FakeIdentity { rng, today }
    }

    fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn gender(&mut self) -> Gender {
        if self.rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    ///
    /// Uniform over every day on which the person is between
    /// MIN_AGE_YEARS and MAX_AGE_YEARS old, both inclusive
    ///
    fn birth_date(&mut self) -> NaiveDate {
        let (earliest, latest) = birth_date_bounds(self.today);
        let span = (latest - earliest).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        earliest + Days::new(offset)
    }

    fn address(&mut self) -> String {
        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let city: String = CityName().fake_with_rng(&mut self.rng);
        let state: String = StateAbbr().fake_with_rng(&mut self.rng);
        let zip: String = ZipCode().fake_with_rng(&mut self.rng);

        single_line(&format!("{building} {street}\n{city}, {state} {zip}"))
    }
}

impl<R: Rng> IdentityProvider for FakeIdentity<R> {
    fn generate_person(&mut self) -> Person {
        Person {
            name: self.name(),
            gender: self.gender(),
            birth_date: self.birth_date(),
            address: self.address(),
        }
    }
}

pub fn birth_date_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let latest = years_before(today, MIN_AGE_YEARS);
    let earliest = years_before(today, MAX_AGE_YEARS + 1) + Days::new(1);
    (earliest, latest)
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn single_line(address: &str) -> String {
    address.replace('\n', ", ")
}

///
/// Numbers the people a provider generates as patients, starting at PAT00001.
///
pub struct PatientGenerator<P: IdentityProvider> {
    provider: P,
    next: u32,
}

impl<P: IdentityProvider> PatientGenerator<P> {
    pub fn new(provider: P) -> Self {
        PatientGenerator { provider, next: 1 }
    }
}

impl<P: IdentityProvider> Iterator for PatientGenerator<P> {
    type Item = Patient;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        self.next = self.next.checked_add(1)?;

        let person = self.provider.generate_person();

        Some(Patient {
            pat_no: pat_no(index),
            name: person.name,
            gender: person.gender,
            birth_date: person.birth_date,
            address: person.address,
        })
    }
}
