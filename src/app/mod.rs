//! Application state for the interactive shell.

pub mod parse;

use anyhow::Result;
use std::io::{BufRead, Write};
use vivarium_core::{SimConfig, World};

use self::parse::{parse_line, Action, HELP};

/// The running shell: owns the world and the REPL loop.
pub struct App {
    pub world: World,
    pub running: bool,
}

impl App {
    /// Builds the world from config and seeds the initial population.
    pub fn new(config: SimConfig) -> Self {
        let initial_population = config.world.initial_population;
        let mut world = World::new(config);
        if initial_population > 0 {
            world.create_people(initial_population);
            tracing::info!(initial_population, "seeded starting population");
        }
        Self {
            world,
            running: true,
        }
    }

    /// Handles one input line, returning text to print (if any).
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        match parse_line(line) {
            Ok(Action::Nothing) => Ok(None),
            Ok(Action::Help) => Ok(Some(HELP.to_string())),
            Ok(Action::Quit) => {
                self.running = false;
                Ok(None)
            }
            Ok(Action::Execute(request)) => {
                let text = self.world.execute(request)?;
                Ok(if text.is_empty() { None } else { Some(text) })
            }
            Err(usage) => Ok(Some(usage)),
        }
    }

    /// Reads lines from `input` until quit or end of input, writing every
    /// response to `output`.
    pub fn run_repl<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "vivarium ready, 'help' lists commands")?;
        for line in input.lines() {
            let line = line?;
            if let Some(text) = self.handle_line(&line)? {
                writeln!(output, "{text}")?;
            }
            if !self.running {
                break;
            }
        }
        Ok(())
    }
}
