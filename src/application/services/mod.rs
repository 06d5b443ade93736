//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (AliasStore, Prompter, NotebookClient, ...)
//! but are themselves concrete structs, not traits.

mod alias;
mod confirm;
mod resolver;
mod studio;

pub use alias::AliasService;
pub use confirm::ConfirmationGate;
pub use resolver::ReferenceResolver;
pub use studio::{AudioOptions, Download, StudioService};
