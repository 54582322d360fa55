use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of aggregate statistics captured after every turn.
///
/// The order of [`StatKey::ALL`] is the column order of the records table;
/// external graphing consumes the records positionally, so the order is part
/// of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    TotalTurns,
    PersonCount,
    AgeMedian,
    EnergyMedian,
    HealthMedian,
    ItemCount,
    FemaleCount,
    MaleCount,
}

impl StatKey {
    /// Every key, in snapshot/column order.
    pub const ALL: [StatKey; 8] = [
        StatKey::TotalTurns,
        StatKey::PersonCount,
        StatKey::AgeMedian,
        StatKey::EnergyMedian,
        StatKey::HealthMedian,
        StatKey::ItemCount,
        StatKey::FemaleCount,
        StatKey::MaleCount,
    ];

    /// Stable label used for stat dumps and record headers.
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::TotalTurns => "total_turns",
            StatKey::PersonCount => "people_count",
            StatKey::AgeMedian => "people_age_median",
            StatKey::EnergyMedian => "people_energy_median",
            StatKey::HealthMedian => "people_health_median",
            StatKey::ItemCount => "item_count",
            StatKey::FemaleCount => "female_count",
            StatKey::MaleCount => "male_count",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
