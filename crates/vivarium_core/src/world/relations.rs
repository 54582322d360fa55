//! The relationship manager: the only code allowed to edit the
//! person-to-thing ownership link.
//!
//! The link is stored twice (thing's owner id, owner's possession list) and
//! both halves are updated together here. Any mismatch found on the way is a
//! [`WorldError::Corrupted`] fault, not a recoverable status.

use vivarium_data::{PersonId, ThingId};

use crate::error::{Result, WorldError};
use crate::world::World;

/// What `release_thing` found when detaching a thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The thing was detached from this owner before removal.
    Released { owner: PersonId },
    /// The thing had no owner; removal only.
    Unowned,
}

impl World {
    /// Assigns a thing to a person. Both must exist; the three failure modes
    /// are mutually exclusive and each is reported separately. A previously
    /// owned thing is detached from its old owner first so the link never
    /// forks.
    pub fn assign_thing(&mut self, thing_id: &ThingId, person_id: &PersonId) -> Result<()> {
        match (
            self.things.contains_key(thing_id),
            self.people.contains_key(person_id),
        ) {
            (true, true) => {}
            (false, true) => return Err(WorldError::AssignThingMissing(*thing_id)),
            (true, false) => return Err(WorldError::AssignPersonMissing(*person_id)),
            (false, false) => return Err(WorldError::AssignBothMissing),
        }

        self.detach_from_owner(thing_id)?;

        let thing = self.things.get_mut(thing_id).ok_or_else(|| {
            WorldError::Corrupted(format!("thing {thing_id} vanished during assign"))
        })?;
        thing.owner = Some(*person_id);
        let person = self.people.get_mut(person_id).ok_or_else(|| {
            WorldError::Corrupted(format!("person {person_id} vanished during assign"))
        })?;
        person.possessions.push(*thing_id);

        self.refresh_person(person_id)?;
        self.refresh_thing(thing_id)?;
        tracing::debug!(thing = %thing_id, person = %person_id, "thing assigned");
        Ok(())
    }

    /// Detaches a thing from its owner (if any) and removes it from the
    /// registry. This is the only legal deletion path for things: skipping
    /// it would strand the thing's identity in the owner's possession list.
    pub fn release_thing(&mut self, thing_id: &ThingId) -> Result<ReleaseOutcome> {
        let owner = match self.things.get(thing_id) {
            Some(thing) => thing.owner,
            None => return Err(WorldError::ThingNotFound(*thing_id)),
        };

        let outcome = match owner {
            Some(owner_id) => {
                self.remove_from_possessions(thing_id, &owner_id)?;
                self.refresh_person(&owner_id)?;
                ReleaseOutcome::Released { owner: owner_id }
            }
            None => ReleaseOutcome::Unowned,
        };

        self.things.remove(thing_id);
        tracing::debug!(thing = %thing_id, ?outcome, "thing released");
        Ok(outcome)
    }

    /// Clears the ownership link of every possession of a dying person. The
    /// things stay in the registry, now unowned.
    pub(crate) fn orphan_possessions(&mut self, person_id: &PersonId) -> Result<()> {
        let possession_ids = match self.people.get_mut(person_id) {
            Some(person) => {
                person.reserve = 0.0;
                std::mem::take(&mut person.possessions)
            }
            None => return Err(WorldError::PersonNotFound(*person_id)),
        };
        for thing_id in possession_ids {
            let thing = self.things.get_mut(&thing_id).ok_or_else(|| {
                WorldError::Corrupted(format!(
                    "person {person_id} lists missing thing {thing_id}"
                ))
            })?;
            thing.owner = None;
        }
        Ok(())
    }

    /// Detaches an owned thing from its owner without removing the thing.
    fn detach_from_owner(&mut self, thing_id: &ThingId) -> Result<()> {
        let owner_id = match self.things.get_mut(thing_id) {
            Some(thing) => match thing.owner.take() {
                Some(owner_id) => owner_id,
                None => return Ok(()),
            },
            None => return Err(WorldError::ThingNotFound(*thing_id)),
        };
        self.remove_from_possessions(thing_id, &owner_id)?;
        self.refresh_person(&owner_id)
    }

    fn remove_from_possessions(&mut self, thing_id: &ThingId, owner_id: &PersonId) -> Result<()> {
        let owner = self.people.get_mut(owner_id).ok_or_else(|| {
            WorldError::Corrupted(format!(
                "thing {thing_id} owned by missing person {owner_id}"
            ))
        })?;
        let before = owner.possessions.len();
        owner.possessions.retain(|id| id != thing_id);
        if owner.possessions.len() == before {
            return Err(WorldError::Corrupted(format!(
                "person {owner_id} does not list owned thing {thing_id}"
            )));
        }
        Ok(())
    }

    /// Revalidates a person's derived state: the possession list must
    /// resolve, every listed thing must point back, and the food reserve is
    /// recomputed from the owned values.
    pub(crate) fn refresh_person(&mut self, person_id: &PersonId) -> Result<()> {
        let possession_ids = match self.people.get(person_id) {
            Some(person) => person.possessions.clone(),
            None => return Err(WorldError::PersonNotFound(*person_id)),
        };
        let mut reserve = 0.0;
        for thing_id in &possession_ids {
            let thing = self.things.get(thing_id).ok_or_else(|| {
                WorldError::Corrupted(format!(
                    "person {person_id} lists missing thing {thing_id}"
                ))
            })?;
            if thing.owner != Some(*person_id) {
                return Err(WorldError::Corrupted(format!(
                    "thing {thing_id} does not acknowledge owner {person_id}"
                )));
            }
            reserve += thing.food_value.max(0.0);
        }
        if let Some(person) = self.people.get_mut(person_id) {
            person.reserve = reserve;
        }
        Ok(())
    }

    /// Revalidates a thing's derived state: an owner reference must resolve
    /// to a person whose possession list contains this thing.
    pub(crate) fn refresh_thing(&mut self, thing_id: &ThingId) -> Result<()> {
        let owner_id = match self.things.get(thing_id) {
            Some(thing) => match thing.owner {
                Some(owner_id) => owner_id,
                None => return Ok(()),
            },
            None => return Err(WorldError::ThingNotFound(*thing_id)),
        };
        let owner = self.people.get(&owner_id).ok_or_else(|| {
            WorldError::Corrupted(format!(
                "thing {thing_id} owned by missing person {owner_id}"
            ))
        })?;
        if !owner.possessions.contains(thing_id) {
            return Err(WorldError::Corrupted(format!(
                "person {owner_id} does not list owned thing {thing_id}"
            )));
        }
        Ok(())
    }
}
