//! Line parser: splits a REPL line into a typed engine request.
//!
//! Lookups are resolved here, by the command the user typed (`show_person`
//! vs `show_thing`), never inferred from how many words followed it.

use vivarium_core::{FocusRequest, Request};

/// What a parsed line asks the shell to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Execute(Request),
    Help,
    Quit,
    Nothing,
}

/// Usage text printed by `help` and after parse errors.
pub const HELP: &str = "\
commands:
  create_person <first> <last>      create a named person
  create_people <count>             create anonymous people
  delete_person <id>                remove a person by identity
  create_child                      birth a child from two random parents
  list_people                       list everyone
  show_person <first> <last>        detail view of matching people
  create_thing <name> <value>       create a food item
  assign_thing <thing-id> <person-id>  give a thing to a person
  delete_thing <id>                 remove a thing by identity
  list_things                       list every thing
  show_thing <name>                 detail view of matching things
  check_things                      run one decay sweep
  run_turn                          advance the world one turn
  run_turns <count>                 advance the world several turns
  show_stats                        dump current statistics
  show_records                      dump the per-turn records table
  help                              this text
  quit                              leave";

/// Parses one input line. Errors are usage messages for the user.
pub fn parse_line(line: &str) -> Result<Action, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Action::Nothing);
    };
    let args: Vec<&str> = words.collect();

    let request = match command {
        "help" => return Ok(Action::Help),
        "quit" | "exit" => return Ok(Action::Quit),
        "create_person" => {
            let [first, last] = take::<2>(command, &args)?;
            Request::CreatePerson {
                first: first.to_string(),
                last: last.to_string(),
            }
        }
        "create_people" => {
            let [count] = take::<1>(command, &args)?;
            Request::CreatePeople {
                count: parse_number(command, count)?,
            }
        }
        "delete_person" => {
            let [identity] = take::<1>(command, &args)?;
            Request::DeletePerson {
                identity: identity.to_string(),
            }
        }
        "create_child" => {
            take::<0>(command, &args)?;
            Request::CreateChild
        }
        "list_people" => {
            take::<0>(command, &args)?;
            Request::ListPeople
        }
        "show_person" => {
            let [first, last] = take::<2>(command, &args)?;
            Request::Focus(FocusRequest::Person {
                first: first.to_string(),
                last: last.to_string(),
            })
        }
        "create_thing" => {
            let [name, value] = take::<2>(command, &args)?;
            Request::CreateThing {
                name: name.to_string(),
                value: parse_number(command, value)?,
            }
        }
        "assign_thing" => {
            let [thing, person] = take::<2>(command, &args)?;
            Request::AssignThing {
                thing: thing.to_string(),
                person: person.to_string(),
            }
        }
        "delete_thing" => {
            let [identity] = take::<1>(command, &args)?;
            Request::DeleteThing {
                identity: identity.to_string(),
            }
        }
        "list_things" => {
            take::<0>(command, &args)?;
            Request::ListThings
        }
        "show_thing" => {
            let [name] = take::<1>(command, &args)?;
            Request::Focus(FocusRequest::Thing {
                name: name.to_string(),
            })
        }
        "check_things" => {
            take::<0>(command, &args)?;
            Request::CheckThings
        }
        "run_turn" => {
            take::<0>(command, &args)?;
            Request::RunTurn
        }
        "run_turns" => {
            let [count] = take::<1>(command, &args)?;
            Request::RunTurns {
                count: parse_number(command, count)?,
            }
        }
        "show_stats" => {
            take::<0>(command, &args)?;
            Request::ShowStats
        }
        "show_records" => {
            take::<0>(command, &args)?;
            Request::ShowRecords
        }
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Action::Execute(request))
}

fn take<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args.to_vec())
        .map_err(|_| format!("'{command}' takes {N} argument(s), got {}", args.len()))
}

fn parse_number<T: std::str::FromStr>(command: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("'{command}': '{raw}' is not a valid number"))
}
