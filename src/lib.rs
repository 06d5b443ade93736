//! nlm: command-line client for hosted notebooks
//!
//! The core of the crate maps short aliases to remote notebook, source and
//! artifact ids, persists that mapping, and guards destructive commands
//! behind an explicit confirmation.
//!
//! Layers, leaf first:
//! - `domain`: aliases, ids, option codes (no I/O)
//! - `application`: alias management, reference resolution, confirmation, studio use cases
//! - `infrastructure`: alias store, stdin prompter, notebook client, wiring
//! - `cli`: clap arguments and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
