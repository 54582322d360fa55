//! Shell layer for the Vivarium simulator: command parsing and the REPL.
//!
//! All simulation logic lives in `vivarium_core`; this crate only turns
//! text lines into typed requests and prints the engine's status text.

pub mod app;
