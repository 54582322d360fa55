//! Turn events and the append-only statistics records table.

use serde::{Deserialize, Serialize};
use vivarium_data::{PersonId, StatKey, ThingId};

/// Something notable that happened while advancing a turn.
///
/// Every event is always collected; the logging toggles only decide which
/// ones the shell prints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum WorldEvent {
    Birth {
        id: PersonId,
        name: String,
        turn: u64,
    },
    Death {
        id: PersonId,
        name: String,
        age: u32,
        turn: u64,
    },
    Spoiled {
        id: ThingId,
        name: String,
        turn: u64,
    },
}

impl WorldEvent {
    /// Renders the event as a user-facing notice.
    pub fn to_message(&self) -> String {
        match self {
            WorldEvent::Birth { name, .. } => format!("{name} created."),
            WorldEvent::Death { name, age, .. } => format!("{name} died at age {age}."),
            WorldEvent::Spoiled { name, .. } => format!("{name} spoiled and was removed."),
        }
    }

    /// Whether the event concerns a person (as opposed to a thing).
    pub fn is_person_event(&self) -> bool {
        matches!(self, WorldEvent::Birth { .. } | WorldEvent::Death { .. })
    }
}

/// One recorded row of aggregate statistics for a completed turn.
///
/// Values are stored in [`StatKey::ALL`] order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TurnRecord {
    pub values: Vec<f64>,
}

impl TurnRecord {
    /// Renders the row as comma-separated values.
    pub fn csv_row(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Header row matching [`TurnRecord::csv_row`] column order.
pub fn records_header() -> String {
    StatKey::ALL
        .iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join(",")
}
