use rand::Rng;
use std::collections::HashMap;
use vivarium_data::{Gender, Person, PersonId};

use crate::error::{Result, WorldError};

/// Picks one living mother and one living father uniformly at random.
///
/// The gender sets are disjoint, so the same person can never be drawn on
/// both sides. Candidate lists are sorted by id before sampling so a seeded
/// rng selects reproducibly regardless of map iteration order.
pub fn choose_parents<R: Rng>(
    people: &HashMap<PersonId, Person>,
    rng: &mut R,
) -> Result<(PersonId, PersonId)> {
    let mut mothers = Vec::new();
    let mut fathers = Vec::new();
    for (id, person) in people {
        match person.gender {
            Gender::Female => mothers.push(*id),
            Gender::Male => fathers.push(*id),
            Gender::Undefined => {
                tracing::warn!(id = %id, "person has undefined gender, skipping for reproduction");
            }
        }
    }
    if mothers.is_empty() || fathers.is_empty() {
        return Err(WorldError::NoEligibleParents);
    }
    mothers.sort_unstable();
    fathers.sort_unstable();

    let mom = mothers[rng.gen_range(0..mothers.len())];
    let dad = fathers[rng.gen_range(0..fathers.len())];
    Ok((mom, dad))
}

const GIVEN_PREFIX: [&str; 25] = [
    "Aethel", "Bel", "Cor", "Dag", "Eld", "Fin", "Grom", "Had", "Ith", "Jor", "Kael", "Luv",
    "Mor", "Nar", "Oth", "Pyr", "Quas", "Rhun", "Syl", "Tor", "Val", "Wun", "Xer", "Yor", "Zan",
];

const GIVEN_SYLLABLES: [&str; 25] = [
    "ae", "ba", "co", "da", "el", "fa", "go", "ha", "id", "jo", "ka", "lu", "ma", "na", "os",
    "pe", "qu", "ri", "sa", "tu", "vi", "wu", "xi", "yo", "ze",
];

/// Composes a child's given name from its identity bytes.
fn given_name(id: &PersonId) -> String {
    let bytes = id.0.as_bytes();
    let prefix = GIVEN_PREFIX[bytes[0] as usize % GIVEN_PREFIX.len()];
    let first = GIVEN_SYLLABLES[bytes[1] as usize % GIVEN_SYLLABLES.len()];
    let second = GIVEN_SYLLABLES[bytes[2] as usize % GIVEN_SYLLABLES.len()];
    format!("{prefix}{first}{second}")
}

/// Builds a newborn from two parents: a generated given name, the father's
/// family name, a random gender, and vitals averaged from the parents
/// (capped at a newborn's starting values).
pub fn make_child<R: Rng>(mom: &Person, dad: &Person, rng: &mut R) -> Person {
    let gender = Gender::sample(rng);
    let mut child = Person::with_rng("child", &dad.last_name, gender, rng);
    child.first_name = given_name(&child.id);
    child.full_name = Person::full_name_of(&child.first_name, &child.last_name);
    child.energy = child.energy.min((mom.energy + dad.energy) / 2.0);
    child.health = child.health.min((mom.health + dad.health) / 2.0);
    child
}
