//! # Vivarium Core
//!
//! The turn-based engine behind the Vivarium population simulator.
//!
//! This crate contains the simulation logic, including:
//! - The world registry of people and things, keyed by identity
//! - The parallel per-person update phase and its single-threaded merge
//! - Bidirectional ownership maintenance between people and things
//! - Reproduction, per-turn statistics, and the append-only records table
//!
//! ## Architecture
//!
//! A turn is a fixed pipeline driven by [`World::run_turn`]: people advance
//! in parallel on owned copies (rayon fan-out, copy-in/copy-out), the merge
//! applies the results back on a single thread, things decay, statistics are
//! refreshed, births land, and a record row is appended. Everything outside
//! the fan-out mutates the world from exactly one thread.
//!
//! ## Example
//!
//! ```
//! use vivarium_core::{SimConfig, World};
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(config);
//!
//! world.create_person("ada", "lovelace");
//! let events = world.run_turn().expect("turn");
//! assert!(events.is_empty());
//! assert_eq!(world.records().len(), 1);
//! ```

/// Configuration sections for the world, vitality tuning, and logging.
pub mod config;
/// Domain errors and the crate-wide result alias.
pub mod error;
/// Turn events and the append-only statistics records table.
pub mod history;
/// Simulation systems applied by the turn orchestrator.
pub mod systems;
/// The world registry, relationship manager, orchestrator, and surface.
pub mod world;

pub use config::{SimConfig, VitalityConfig};
pub use error::{Result, WorldError};
pub use history::{TurnRecord, WorldEvent};
pub use world::commands::{FocusRequest, Request};
pub use world::relations::ReleaseOutcome;
pub use world::World;
