use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::capitalize;
use super::thing::ThingId;

/// Energy a person starts life with.
pub const STARTING_ENERGY: f64 = 100.0;
/// Health a person starts life with.
pub const STARTING_HEALTH: f64 = 100.0;

/// Unique identification of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    /// Draws a fresh 128-bit identity from the supplied rng.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self(Uuid::from_u128(rng.gen::<u128>()))
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Gender tag used by the reproduction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Undefined,
}

impl Gender {
    /// Samples a defined gender with even odds.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Undefined => "undefined",
        };
        f.write_str(label)
    }
}

/// A person living in the world registry.
///
/// Possessions hold only thing identities; the registry owns the things
/// themselves, so either collection can be iterated or mutated on its own.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub gender: Gender,
    pub age: u32,
    pub energy: f64,
    pub health: f64,
    pub alive: bool,
    pub possessions: Vec<ThingId>,
    /// Total food value of owned things, recomputed on every ownership change.
    pub reserve: f64,
}

impl Person {
    /// Creates a person using ambient entropy. Prefer [`Person::with_rng`]
    /// inside the engine so identities stay reproducible under a seed.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        let mut rng = rand::thread_rng();
        let gender = Gender::sample(&mut rng);
        Self {
            id: PersonId(Uuid::new_v4()),
            ..Self::with_rng(first_name, last_name, gender, &mut rng)
        }
    }

    /// Creates a person drawing identity bits from the supplied rng.
    pub fn with_rng<R: Rng>(first_name: &str, last_name: &str, gender: Gender, rng: &mut R) -> Self {
        let first_name = capitalize(first_name);
        let last_name = capitalize(last_name);
        let full_name = Self::full_name_of(&first_name, &last_name);
        Self {
            id: PersonId::from_rng(rng),
            first_name,
            last_name,
            full_name,
            gender,
            age: 0,
            energy: STARTING_ENERGY,
            health: STARTING_HEALTH,
            alive: true,
            possessions: Vec::new(),
            reserve: 0.0,
        }
    }

    /// Joins two already-normalized name fragments into the display name.
    pub fn full_name_of(first_name: &str, last_name: &str) -> String {
        format!("{}_{}", capitalize(first_name), capitalize(last_name))
    }

    /// One-line summary used by listings.
    pub fn summary(&self) -> String {
        self.full_name.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] gender={} age={} energy={:.1} health={:.1} possessions={}",
            self.full_name,
            self.id,
            self.gender,
            self.age,
            self.energy,
            self.health,
            self.possessions.len()
        )
    }
}
