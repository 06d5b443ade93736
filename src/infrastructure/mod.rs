//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod alias_store;
pub mod di;
pub mod error;
pub mod traits;

pub use alias_store::{MemoryAliasStore, TomlAliasStore};
pub use error::InfraError;
