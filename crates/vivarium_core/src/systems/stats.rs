use std::collections::HashMap;
use vivarium_data::{Gender, Person, PersonId, StatKey};

/// Median of an unsorted sample; the mean of the two middle values for even
/// counts, 0.0 for an empty sample (a deliberate saturating default).
pub fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// Recomputes every aggregate statistic from the current population.
///
/// Writes all keys unconditionally so the map is fully populated after the
/// first refresh.
pub fn refresh(
    tick: u64,
    people: &HashMap<PersonId, Person>,
    thing_count: usize,
    stats: &mut HashMap<StatKey, f64>,
) {
    let ages: Vec<f64> = people.values().map(|p| f64::from(p.age)).collect();
    let energies: Vec<f64> = people.values().map(|p| p.energy).collect();
    let healths: Vec<f64> = people.values().map(|p| p.health).collect();
    let females = people
        .values()
        .filter(|p| p.gender == Gender::Female)
        .count();
    let males = people.values().filter(|p| p.gender == Gender::Male).count();

    stats.insert(StatKey::TotalTurns, tick as f64);
    stats.insert(StatKey::PersonCount, people.len() as f64);
    stats.insert(StatKey::AgeMedian, median(ages));
    stats.insert(StatKey::EnergyMedian, median(energies));
    stats.insert(StatKey::HealthMedian, median(healths));
    stats.insert(StatKey::ItemCount, thing_count as f64);
    stats.insert(StatKey::FemaleCount, females as f64);
    stats.insert(StatKey::MaleCount, males as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_median_of_empty_sample_is_zero() {
        assert_eq!(median(Vec::new()), 0.0);
    }

    #[test]
    fn test_median_odd_and_even_counts() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(vec![7.0]), 7.0);
    }

    #[test]
    fn test_refresh_populates_every_key() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut people = HashMap::new();
        for gender in [Gender::Female, Gender::Female, Gender::Male] {
            let person = Person::with_rng("anonymous", "person", gender, &mut rng);
            people.insert(person.id, person);
        }

        let mut stats = HashMap::new();
        refresh(12, &people, 4, &mut stats);

        for key in StatKey::ALL {
            assert!(stats.contains_key(&key), "missing {key}");
        }
        assert_eq!(stats[&StatKey::TotalTurns], 12.0);
        assert_eq!(stats[&StatKey::PersonCount], 3.0);
        assert_eq!(stats[&StatKey::ItemCount], 4.0);
        assert_eq!(stats[&StatKey::FemaleCount], 2.0);
        assert_eq!(stats[&StatKey::MaleCount], 1.0);
        assert_eq!(stats[&StatKey::AgeMedian], 0.0);
    }

    #[test]
    fn test_refresh_on_empty_world_saturates_to_zero() {
        let mut stats = HashMap::new();
        refresh(1, &HashMap::new(), 0, &mut stats);

        assert_eq!(stats[&StatKey::PersonCount], 0.0);
        assert_eq!(stats[&StatKey::EnergyMedian], 0.0);
        assert_eq!(stats[&StatKey::HealthMedian], 0.0);
    }
}
