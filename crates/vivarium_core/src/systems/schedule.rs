use rayon::prelude::*;
use vivarium_data::Person;

use crate::config::VitalityConfig;
use crate::systems::vitality;

/// Advances every person in `people` by one turn, in any order.
///
/// The fan-out uses the rayon worker pool (sized to the host's available
/// parallelism) once the population reaches `parallel_threshold`; below that,
/// or when the host reports a single unit of parallelism, dispatch overhead
/// would dominate and the batch runs sequentially. Workers only ever see
/// owned copies; the caller performs the single authoritative merge.
pub fn advance_all(
    people: Vec<Person>,
    tuning: &VitalityConfig,
    parallel_threshold: usize,
) -> Vec<Person> {
    let workers = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);

    if workers > 1 && people.len() >= parallel_threshold {
        people
            .into_par_iter()
            .map(|person| vitality::advance(person, tuning))
            .collect()
    } else {
        people
            .into_iter()
            .map(|person| vitality::advance(person, tuning))
            .collect()
    }
}
