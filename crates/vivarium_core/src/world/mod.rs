//! The world registry: the authoritative store of people, things, stats,
//! and turn records.
//!
//! There is no process-wide state; every operation is a method on an
//! explicit [`World`] receiver. Workers never see this struct: the turn
//! pipeline hands them owned copies and merges results back here on a
//! single thread.

pub mod commands;
pub mod relations;
pub mod turn;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use vivarium_data::{capitalize, Gender, Person, PersonId, StatKey, Thing, ThingId};

use crate::config::SimConfig;
use crate::error::{Result, WorldError};
use crate::history::TurnRecord;
use crate::systems::reproduction;

/// Empty-collection sentinel surfaced by people listings.
pub const NO_PEOPLE: &str = "No people exist.";
/// Empty-collection sentinel surfaced by thing listings.
pub const NO_THINGS: &str = "Nothing exists yet.";

pub struct World {
    pub config: SimConfig,
    tick: u64,
    people: HashMap<PersonId, Person>,
    things: HashMap<ThingId, Thing>,
    stats: HashMap<StatKey, f64>,
    records: Vec<TurnRecord>,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates an empty world. The rng is seeded from the config when a seed
    /// is present, from entropy otherwise.
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        Self {
            config,
            tick: 0,
            people: HashMap::new(),
            things: HashMap::new(),
            stats: HashMap::new(),
            records: Vec::new(),
            rng,
        }
    }

    /// Number of completed turns.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Read-only access to the living population.
    #[must_use]
    pub fn people(&self) -> &HashMap<PersonId, Person> {
        &self.people
    }

    /// Read-only access to the registered things.
    #[must_use]
    pub fn things(&self) -> &HashMap<ThingId, Thing> {
        &self.things
    }

    /// Borrow one person by identity.
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Borrow one thing by identity.
    #[must_use]
    pub fn thing(&self, id: &ThingId) -> Option<&Thing> {
        self.things.get(id)
    }

    /// Number of living people.
    #[must_use]
    pub fn population(&self) -> usize {
        self.people.len()
    }

    /// Current value of one statistic (0.0 before the first refresh).
    #[must_use]
    pub fn stat(&self, key: StatKey) -> f64 {
        self.stats.get(&key).copied().unwrap_or(0.0)
    }

    /// The append-only per-turn records table.
    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Inserts a new live person, rolling gender and identity from the
    /// world rng. Never fails.
    pub fn create_person(&mut self, first_name: &str, last_name: &str) -> PersonId {
        let gender = Gender::sample(&mut self.rng);
        let person = Person::with_rng(first_name, last_name, gender, &mut self.rng);
        let id = person.id;
        tracing::debug!(id = %id, name = %person.full_name, "person created");
        self.people.insert(id, person);
        id
    }

    /// Inserts `count` anonymous persons.
    pub fn create_people(&mut self, count: usize) -> Vec<PersonId> {
        (0..count)
            .map(|_| self.create_person("anonymous", "person"))
            .collect()
    }

    /// Inserts a pre-built person (used by tests and builders).
    pub fn spawn_person(&mut self, person: Person) -> PersonId {
        let id = person.id;
        self.people.insert(id, person);
        id
    }

    /// Removes a person, orphaning every possession first so no thing is
    /// left pointing at a dead owner.
    pub fn delete_person(&mut self, id: &PersonId) -> Result<Person> {
        if !self.people.contains_key(id) {
            return Err(WorldError::PersonNotFound(*id));
        }
        self.orphan_possessions(id)?;
        let person = self
            .people
            .remove(id)
            .ok_or_else(|| WorldError::Corrupted(format!("person {id} vanished during delete")))?;
        tracing::debug!(id = %id, name = %person.full_name, "person removed");
        Ok(person)
    }

    /// Inserts a new thing. Never fails.
    pub fn create_thing(&mut self, name: &str, food_value: f64) -> ThingId {
        let thing = Thing::with_rng(name, food_value, &mut self.rng);
        let id = thing.id;
        tracing::debug!(id = %id, name = %thing.name, "thing created");
        self.things.insert(id, thing);
        id
    }

    /// Inserts a pre-built thing (used by tests and builders).
    pub fn spawn_thing(&mut self, thing: Thing) -> ThingId {
        let id = thing.id;
        self.things.insert(id, thing);
        id
    }

    /// Removes a thing through the relationship manager, which is the only
    /// legal deletion path for a possibly-owned thing.
    pub fn delete_thing(&mut self, id: &ThingId) -> Result<relations::ReleaseOutcome> {
        self.release_thing(id)
    }

    /// Creates a child from two randomly chosen living parents.
    pub fn create_child(&mut self) -> Result<PersonId> {
        let (mom_id, dad_id) = reproduction::choose_parents(&self.people, &mut self.rng)?;
        let child = {
            let (Some(mom), Some(dad)) = (self.people.get(&mom_id), self.people.get(&dad_id))
            else {
                return Err(WorldError::Corrupted("chosen parent vanished".into()));
            };
            reproduction::make_child(mom, dad, &mut self.rng)
        };
        let id = child.id;
        tracing::debug!(id = %id, name = %child.full_name, mom = %mom_id, dad = %dad_id, "child created");
        self.people.insert(id, child);
        Ok(id)
    }

    /// Lazy, restartable listing of everyone's display summary. An empty
    /// registry yields a single sentinel line instead of nothing.
    pub fn list_people(&self) -> impl Iterator<Item = String> + '_ {
        let sentinel = self.people.is_empty().then(|| NO_PEOPLE.to_string());
        sentinel
            .into_iter()
            .chain(self.people.values().map(Person::summary))
    }

    /// Lazy, restartable listing of every thing's display summary, with the
    /// same empty-registry sentinel behaviour.
    pub fn list_things(&self) -> impl Iterator<Item = String> + '_ {
        let sentinel = self.things.is_empty().then(|| NO_THINGS.to_string());
        sentinel
            .into_iter()
            .chain(self.things.values().map(Thing::summary))
    }

    /// Linear scan for every person whose full name matches. Names are not
    /// unique, so all matches are returned.
    pub fn find_people_by_full_name(&self, full_name: &str) -> Vec<&Person> {
        self.people
            .values()
            .filter(|p| p.full_name == full_name)
            .collect()
    }

    /// Linear scan for every thing with the given (normalized) name.
    pub fn find_things_by_name(&self, name: &str) -> Vec<&Thing> {
        let name = capitalize(name);
        self.things.values().filter(|t| t.name == name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_world() -> World {
        let mut config = SimConfig::default();
        config.world.seed = Some(42);
        World::new(config)
    }

    #[test]
    fn test_create_and_delete_person() {
        let mut world = seeded_world();
        let id = world.create_person("ada", "lovelace");
        assert_eq!(world.population(), 1);

        let removed = world.delete_person(&id).expect("delete");
        assert_eq!(removed.full_name, "Ada_Lovelace");
        assert_eq!(world.population(), 0);

        assert!(matches!(
            world.delete_person(&id),
            Err(WorldError::PersonNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_create_people_inserts_anonymous_batch() {
        let mut world = seeded_world();
        let ids = world.create_people(5);
        assert_eq!(ids.len(), 5);
        assert_eq!(world.population(), 5);
        for id in ids {
            assert_eq!(world.person(&id).expect("person").full_name, "Anonymous_Person");
        }
    }

    #[test]
    fn test_identities_are_reproducible_under_seed() {
        let mut a = seeded_world();
        let mut b = seeded_world();
        assert_eq!(a.create_person("x", "y"), b.create_person("x", "y"));
    }

    #[test]
    fn test_listings_yield_sentinels_when_empty() {
        let mut world = seeded_world();
        assert_eq!(world.list_people().collect::<Vec<_>>(), vec![NO_PEOPLE]);
        assert_eq!(world.list_things().collect::<Vec<_>>(), vec![NO_THINGS]);

        world.create_person("ada", "lovelace");
        world.create_thing("apple", 2.0);
        assert_eq!(world.list_people().collect::<Vec<_>>(), vec!["Ada_Lovelace"]);
        assert_eq!(world.list_things().collect::<Vec<_>>(), vec!["Apple"]);

        // restartable: a second call walks the sequence again
        assert_eq!(world.list_people().count(), 1);
        assert_eq!(world.list_people().count(), 1);
    }

    #[test]
    fn test_find_returns_all_matches() {
        let mut world = seeded_world();
        world.create_person("ada", "lovelace");
        world.create_person("ada", "lovelace");
        world.create_person("grace", "hopper");

        assert_eq!(world.find_people_by_full_name("Ada_Lovelace").len(), 2);
        assert!(world.find_people_by_full_name("Missing_Person").is_empty());

        world.create_thing("apple", 1.0);
        assert_eq!(world.find_things_by_name("APPLE").len(), 1);
        assert!(world.find_things_by_name("pear").is_empty());
    }

    #[test]
    fn test_create_child_requires_both_genders() {
        let mut world = seeded_world();
        assert_eq!(world.create_child(), Err(WorldError::NoEligibleParents));
        assert_eq!(world.population(), 0, "failed reproduction inserts nothing");
    }
}
