use vivarium_data::Person;

use crate::config::VitalityConfig;

/// Advances one person by one turn.
///
/// The transition is pure: it consumes an owned copy and returns the updated
/// copy, so it can run on any worker without touching shared state. Energy
/// and health only ever decrease, which bounds every lifespan.
pub fn advance(mut person: Person, tuning: &VitalityConfig) -> Person {
    person.age = person.age.saturating_add(1);

    let drain = if person.reserve > 0.0 {
        tuning.metabolism * tuning.provisioned_factor
    } else {
        tuning.metabolism
    };
    person.energy -= drain;

    let mut wear = tuning.senescence;
    if person.energy < tuning.hunger_threshold {
        wear += tuning.starvation_penalty;
    }
    person.health -= wear;

    if !person.energy.is_finite() || !person.health.is_finite() {
        // A poisoned input must not sink the whole batch; the person takes a
        // terminal update instead.
        tracing::warn!(id = %person.id, name = %person.full_name, "non-finite vitals, terminal update");
        person.alive = false;
        return person;
    }

    person.alive = person.energy > 0.0 && person.health > 0.0;
    person
}
