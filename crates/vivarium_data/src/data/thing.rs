use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::capitalize;
use super::person::PersonId;

/// Unique identification of a thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThingId(pub Uuid);

impl ThingId {
    /// Draws a fresh 128-bit identity from the supplied rng.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self(Uuid::from_u128(rng.gen::<u128>()))
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ThingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A consumable item (food) tracked by the world registry.
///
/// The owner is a back-reference by identity only; the owner's possession
/// list is the other half of the link and both sides are kept consistent by
/// the relationship manager.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Thing {
    pub id: ThingId,
    pub name: String,
    pub food_value: f64,
    pub owner: Option<PersonId>,
}

impl Thing {
    /// Creates a thing using ambient entropy. Prefer [`Thing::with_rng`]
    /// inside the engine.
    pub fn new(name: &str, food_value: f64) -> Self {
        Self {
            id: ThingId(Uuid::new_v4()),
            name: capitalize(name),
            food_value,
            owner: None,
        }
    }

    /// Creates a thing drawing identity bits from the supplied rng.
    pub fn with_rng<R: Rng>(name: &str, food_value: f64, rng: &mut R) -> Self {
        Self {
            id: ThingId::from_rng(rng),
            name: capitalize(name),
            food_value,
            owner: None,
        }
    }

    /// One-line summary used by listings.
    pub fn summary(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Some(owner) => write!(
                f,
                "{} [{}] value={:.1} owner={}",
                self.name, self.id, self.food_value, owner
            ),
            None => write!(
                f,
                "{} [{}] value={:.1} unowned",
                self.name, self.id, self.food_value
            ),
        }
    }
}
