mod common;

use common::{PersonBuilder, WorldBuilder};
use vivarium_core::history::records_header;
use vivarium_data::{Gender, StatKey};

#[test]
fn test_stats_match_a_handmade_population() {
    let people = [
        ("a", Gender::Female, 10u32, 80.0, 90.0),
        ("b", Gender::Female, 20, 60.0, 70.0),
        ("c", Gender::Male, 30, 40.0, 50.0),
    ];
    let mut builder = WorldBuilder::new();
    for (i, (name, gender, age, energy, health)) in people.iter().enumerate() {
        builder = builder.with_person(
            PersonBuilder::new()
                .named(name, "test")
                .seed(i as u64)
                .gender(*gender)
                .age(*age)
                .energy(*energy)
                .health(*health)
                .build(),
        );
    }
    let mut world = builder.build();
    world.create_thing("apple", 5.0);
    world.refresh_stats();

    assert_eq!(world.stat(StatKey::PersonCount), 3.0);
    assert_eq!(world.stat(StatKey::ItemCount), 1.0);
    assert_eq!(world.stat(StatKey::FemaleCount), 2.0);
    assert_eq!(world.stat(StatKey::MaleCount), 1.0);
    assert_eq!(world.stat(StatKey::AgeMedian), 20.0);
    assert_eq!(world.stat(StatKey::EnergyMedian), 60.0);
    assert_eq!(world.stat(StatKey::HealthMedian), 70.0);
}

#[test]
fn test_empty_population_medians_saturate_to_zero() {
    let mut world = WorldBuilder::new().build();
    world.refresh_stats();

    assert_eq!(world.stat(StatKey::AgeMedian), 0.0);
    assert_eq!(world.stat(StatKey::EnergyMedian), 0.0);
    assert_eq!(world.stat(StatKey::HealthMedian), 0.0);
    assert_eq!(world.stat(StatKey::PersonCount), 0.0);
}

#[test]
fn test_records_have_fixed_columns_and_no_missing_turns() {
    let mut world = WorldBuilder::new().build();
    world.create_people(6);
    world.run_turns(10).expect("turns");

    assert_eq!(world.records().len(), 10);
    for (i, record) in world.records().iter().enumerate() {
        assert_eq!(record.values.len(), StatKey::ALL.len());
        assert_eq!(record.values[0], (i + 1) as f64, "turn column is dense");
    }
}

#[test]
fn test_records_csv_shape() {
    let mut world = WorldBuilder::new().build();
    world.create_people(2);
    world.run_turns(3).expect("turns");

    let header = records_header();
    assert_eq!(
        header,
        "total_turns,people_count,people_age_median,people_energy_median,people_health_median,item_count,female_count,male_count"
    );
    for record in world.records() {
        assert_eq!(
            record.csv_row().split(',').count(),
            header.split(',').count()
        );
    }
}

#[test]
fn test_stats_are_fully_populated_after_the_first_turn() {
    let mut world = WorldBuilder::new().build();
    world.create_people(1);
    world.run_turn().expect("turn");

    let record = world.records().last().expect("record");
    assert_eq!(record.values.len(), StatKey::ALL.len());
    assert_eq!(world.stat(StatKey::TotalTurns), 1.0);
    assert_eq!(world.stat(StatKey::PersonCount), 1.0);
}
