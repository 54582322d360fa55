//! The request surface exposed to the shell.
//!
//! Every operation is a tagged [`Request`]; the caller decides what it is
//! asking for instead of the engine guessing from argument counts. Execution
//! returns human-readable status text. Recoverable errors render as their
//! status message; only a corruption fault propagates as an error.

use std::fmt::Write as _;
use vivarium_data::{Person, PersonId, StatKey, ThingId};

use crate::error::{Result, WorldError};
use crate::history::{records_header, WorldEvent};
use crate::world::relations::ReleaseOutcome;
use crate::world::World;

/// A lookup resolved by the caller: person by name pair, thing by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusRequest {
    Person { first: String, last: String },
    Thing { name: String },
}

/// One operation against the world.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CreatePerson { first: String, last: String },
    CreatePeople { count: usize },
    DeletePerson { identity: String },
    CreateChild,
    ListPeople,
    ListThings,
    Focus(FocusRequest),
    CreateThing { name: String, value: f64 },
    AssignThing { thing: String, person: String },
    DeleteThing { identity: String },
    CheckThings,
    RunTurn,
    RunTurns { count: u64 },
    ShowStats,
    ShowRecords,
}

fn parse_person_id(raw: &str) -> Result<PersonId> {
    raw.parse()
        .map_err(|_| WorldError::InvalidIdentity(raw.to_string()))
}

fn parse_thing_id(raw: &str) -> Result<ThingId> {
    raw.parse()
        .map_err(|_| WorldError::InvalidIdentity(raw.to_string()))
}

impl World {
    /// Executes one request, producing status text. Recoverable errors are
    /// part of the text contract; a [`WorldError::Corrupted`] fault is the
    /// only `Err` this returns.
    pub fn execute(&mut self, request: Request) -> Result<String> {
        let outcome = self.dispatch(request);
        match outcome {
            Ok(text) => Ok(text),
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => Ok(error.to_string()),
        }
    }

    fn dispatch(&mut self, request: Request) -> Result<String> {
        match request {
            Request::CreatePerson { first, last } => {
                let id = self.create_person(&first, &last);
                Ok(self.person_notice(&id))
            }
            Request::CreatePeople { count } => {
                self.create_people(count);
                Ok(format!("{count} people were created."))
            }
            Request::DeletePerson { identity } => {
                let id = parse_person_id(&identity)?;
                let person = self.delete_person(&id)?;
                Ok(format!("{} removed.", person.full_name))
            }
            Request::CreateChild => {
                let id = self.create_child()?;
                Ok(self.person_notice(&id))
            }
            Request::ListPeople => Ok(self.list_people().collect::<Vec<_>>().join("\n")),
            Request::ListThings => Ok(self.list_things().collect::<Vec<_>>().join("\n")),
            Request::Focus(focus) => Ok(self.focus(&focus)),
            Request::CreateThing { name, value } => {
                let id = self.create_thing(&name, value);
                let name = self
                    .thing(&id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                Ok(format!("{name} created."))
            }
            Request::AssignThing { thing, person } => {
                let thing_id = parse_thing_id(&thing)?;
                let person_id = parse_person_id(&person)?;
                self.assign_thing(&thing_id, &person_id)?;
                let thing_name = self
                    .thing(&thing_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                let person_name = self
                    .person(&person_id)
                    .map(|p| p.full_name.clone())
                    .unwrap_or_default();
                Ok(format!("{thing_name} assigned to {person_name}."))
            }
            Request::DeleteThing { identity } => {
                let id = parse_thing_id(&identity)?;
                let name = self
                    .thing(&id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                match self.delete_thing(&id)? {
                    ReleaseOutcome::Released { .. } => Ok(format!("{name} deleted.")),
                    ReleaseOutcome::Unowned => {
                        Ok(format!("{name} was not owned by anybody!"))
                    }
                }
            }
            Request::CheckThings => {
                let mut events = Vec::new();
                self.check_things(&mut events)?;
                Ok(self.render_events(&events))
            }
            Request::RunTurn => {
                let events = self.run_turn()?;
                Ok(self.render_events(&events))
            }
            Request::RunTurns { count } => {
                let events = self.run_turns(count)?;
                let mut text = format!("Iter: {count} turns.");
                let notices = self.render_events(&events);
                if !notices.is_empty() {
                    text.push('\n');
                    text.push_str(&notices);
                }
                Ok(text)
            }
            Request::ShowStats => {
                self.refresh_stats();
                let mut text = String::new();
                for key in StatKey::ALL {
                    let _ = writeln!(text, "{}: {}", key.label(), self.stat(key));
                }
                Ok(text.trim_end().to_string())
            }
            Request::ShowRecords => {
                let mut text = records_header();
                for record in self.records() {
                    text.push('\n');
                    text.push_str(&record.csv_row());
                }
                Ok(text)
            }
        }
    }

    fn person_notice(&self, id: &PersonId) -> String {
        if !self.config.logging.person_messages {
            return String::new();
        }
        self.person(id)
            .map(|p| format!("{} created.", p.full_name))
            .unwrap_or_default()
    }

    fn focus(&self, focus: &FocusRequest) -> String {
        match focus {
            FocusRequest::Person { first, last } => {
                let full_name = Person::full_name_of(first, last);
                let matches = self.find_people_by_full_name(&full_name);
                if matches.is_empty() {
                    "Cannot find the person you are searching.".to_string()
                } else {
                    matches
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            FocusRequest::Thing { name } => {
                let matches = self.find_things_by_name(name);
                if matches.is_empty() {
                    "Cannot find the thing you are searching.".to_string()
                } else {
                    matches
                        .iter()
                        .map(|t| t.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
        }
    }

    fn render_events(&self, events: &[WorldEvent]) -> String {
        events
            .iter()
            .filter(|event| {
                if event.is_person_event() {
                    self.config.logging.person_messages
                } else {
                    self.config.logging.thing_messages
                }
            })
            .map(WorldEvent::to_message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
