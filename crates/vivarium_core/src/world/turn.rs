//! The turn orchestrator.
//!
//! One turn is a fixed pipeline: tick increment, parallel person update and
//! single-threaded merge, thing decay sweep, statistics refresh, births,
//! record append. Turns are strictly sequential; only the person update
//! inside a turn fans out.

use vivarium_data::{Person, StatKey, ThingId};

use crate::error::Result;
use crate::history::{TurnRecord, WorldEvent};
use crate::systems::{schedule, stats};
use crate::world::World;

impl World {
    /// Advances the world by one turn, returning everything notable that
    /// happened. The merge is atomic with respect to the registry: when this
    /// returns, no partial turn is visible.
    pub fn run_turn(&mut self) -> Result<Vec<WorldEvent>> {
        self.tick += 1;
        let mut events = Vec::new();

        self.update_people(&mut events)?;
        self.check_things(&mut events)?;
        self.refresh_stats();
        self.apply_environment(&mut events);
        self.append_record();

        tracing::debug!(
            turn = self.tick,
            population = self.people.len(),
            things = self.things.len(),
            events = events.len(),
            "turn complete"
        );
        Ok(events)
    }

    /// Runs `count` sequential turns with no early exit.
    pub fn run_turns(&mut self, count: u64) -> Result<Vec<WorldEvent>> {
        let mut events = Vec::new();
        for _ in 0..count {
            events.extend(self.run_turn()?);
        }
        Ok(events)
    }

    /// Fan-out/fan-in person update. Workers receive owned copies and return
    /// owned results; this thread performs the single authoritative merge.
    /// The dead leave through the normal delete path so possessions are
    /// never stranded.
    fn update_people(&mut self, events: &mut Vec<WorldEvent>) -> Result<()> {
        if self.people.is_empty() {
            return Ok(());
        }
        let snapshot: Vec<Person> = self.people.values().cloned().collect();
        let expected = snapshot.len();
        let updated = schedule::advance_all(
            snapshot,
            &self.config.vitality,
            self.config.world.parallel_threshold,
        );
        debug_assert_eq!(updated.len(), expected, "merge must cover every person");

        for person in updated {
            let id = person.id;
            if person.alive {
                self.people.insert(id, person);
            } else {
                let name = person.full_name.clone();
                let age = person.age;
                self.people.insert(id, person);
                self.delete_person(&id)?;
                events.push(WorldEvent::Death {
                    id,
                    name,
                    age,
                    turn: self.tick,
                });
            }
        }
        Ok(())
    }

    /// Decay sweep: every thing loses the configured spoilage, and anything
    /// at or below zero value is released and removed.
    pub fn check_things(&mut self, events: &mut Vec<WorldEvent>) -> Result<()> {
        if self.things.is_empty() {
            return Ok(());
        }
        let spoilage = self.config.vitality.spoilage;
        let ids: Vec<ThingId> = self.things.keys().copied().collect();
        for id in ids {
            let Some(thing) = self.things.get_mut(&id) else {
                continue;
            };
            thing.food_value -= spoilage;
            if thing.food_value <= 0.0 {
                let name = thing.name.clone();
                self.release_thing(&id)?;
                events.push(WorldEvent::Spoiled {
                    id,
                    name,
                    turn: self.tick,
                });
            }
        }
        // decayed values changed every owner's reserve
        let owner_ids: Vec<_> = self.things.values().filter_map(|t| t.owner).collect();
        for owner_id in owner_ids {
            self.refresh_person(&owner_id)?;
        }
        Ok(())
    }

    /// Recomputes the statistics map from the current registry state.
    pub fn refresh_stats(&mut self) {
        stats::refresh(self.tick, &self.people, self.things.len(), &mut self.stats);
    }

    /// Environment effects: population growth proportional to the birth
    /// rate, rounded down.
    fn apply_environment(&mut self, events: &mut Vec<WorldEvent>) {
        let births = (self.people.len() as f64 * self.config.world.birth_rate).floor() as usize;
        for _ in 0..births {
            let id = self.create_person("anonymous", "person");
            let name = self
                .people
                .get(&id)
                .map(|p| p.full_name.clone())
                .unwrap_or_default();
            events.push(WorldEvent::Birth {
                id,
                name,
                turn: self.tick,
            });
        }
        if births > 0 {
            tracing::debug!(turn = self.tick, births, "environment births");
        }
    }

    /// Appends one record row in [`StatKey::ALL`] order.
    fn append_record(&mut self) {
        let values = StatKey::ALL.iter().map(|key| self.stat(*key)).collect();
        self.records.push(TurnRecord { values });
    }
}
