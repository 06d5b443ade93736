//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod codes;
pub mod entities;
pub mod error;

pub use codes::CodeMapper;
pub use entities::*;
pub use error::DomainError;
