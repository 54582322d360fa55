use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vivarium_core::{SimConfig, World};
use vivarium_data::{Gender, Person, Thing};

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    people: Vec<Person>,
    things: Vec<Thing>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.seed = Some(42);
        config.world.birth_rate = 0.0;
        Self {
            config,
            people: Vec::new(),
            things: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    pub fn with_thing(mut self, thing: Thing) -> Self {
        self.things.push(thing);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config);
        for person in self.people {
            world.spawn_person(person);
        }
        for thing in self.things {
            world.spawn_thing(thing);
        }
        world
    }
}

#[allow(dead_code)]
pub struct PersonBuilder {
    first: String,
    last: String,
    gender: Gender,
    energy: Option<f64>,
    health: Option<f64>,
    age: Option<u32>,
    seed: Option<u64>,
}

#[allow(dead_code)]
impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            first: "anonymous".into(),
            last: "person".into(),
            gender: Gender::Female,
            energy: None,
            health: None,
            age: None,
            seed: None,
        }
    }

    pub fn named(mut self, first: &str, last: &str) -> Self {
        self.first = first.into();
        self.last = last.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Person {
        // Seed the identity from the name unless a seed was given, so
        // repeated test runs construct the same person.
        let seed = self.seed.unwrap_or_else(|| {
            self.first
                .bytes()
                .chain(self.last.bytes())
                .fold(0xCBF2_9CE4_8422_2325u64, |acc, b| {
                    (acc ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01B3)
                })
        });
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut person = Person::with_rng(&self.first, &self.last, self.gender, &mut rng);
        if let Some(energy) = self.energy {
            person.energy = energy;
        }
        if let Some(health) = self.health {
            person.health = health;
        }
        if let Some(age) = self.age {
            person.age = age;
        }
        person
    }
}

/// Asserts the bidirectional ownership invariant over the whole registry.
#[allow(dead_code)]
pub fn assert_ownership_consistent(world: &World) {
    for (thing_id, thing) in world.things() {
        if let Some(owner_id) = thing.owner {
            let owner = world
                .person(&owner_id)
                .unwrap_or_else(|| panic!("thing {thing_id} owned by missing person {owner_id}"));
            assert!(
                owner.possessions.contains(thing_id),
                "owner {owner_id} does not list thing {thing_id}"
            );
        }
    }
    for (person_id, person) in world.people() {
        for thing_id in &person.possessions {
            let thing = world
                .thing(thing_id)
                .unwrap_or_else(|| panic!("person {person_id} lists missing thing {thing_id}"));
            assert_eq!(
                thing.owner,
                Some(*person_id),
                "thing {thing_id} does not acknowledge owner {person_id}"
            );
        }
    }
}
