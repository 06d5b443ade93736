//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent validation failures on user input.
/// These are independent of storage and transport concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid alias name '{name}': {reason}")]
    InvalidAliasName { name: String, reason: String },

    #[error("invalid remote id '{0}': expected a UUID like 00000000-0000-0000-0000-000000000000")]
    InvalidRemoteId(String),

    #[error("unknown resource type '{0}' (expected one of: notebook, source, artifact)")]
    UnknownResourceType(String),

    #[error("cannot name a file after artifact '{0}': it is not a remote id, use --output")]
    OutputPathRequired(String),

    #[error("unknown {option} '{value}' (expected one of: {expected})")]
    UnknownOption {
        option: &'static str,
        value: String,
        expected: String,
    },
}
