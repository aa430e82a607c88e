//! Error types for the decision layer
//!
//! Only configuration can fail. Resolutions over degenerate tallies always
//! produce a well-defined record instead of an error.

use crate::DecisionKind;

/// Errors raised while validating decision configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid threshold: {field} = {value} (must be within 0..=100)")]
    InvalidThreshold { field: &'static str, value: u32 },

    #[error("Invalid advancement bounds: minimum {minimum} exceeds maximum {maximum}")]
    InvalidAdvancementBounds { minimum: usize, maximum: usize },

    #[error("Invalid advancement bounds: minimum advancing must be at least 1")]
    InvalidMinimumAdvancing,

    #[error("Invalid expiry: {0} days (must be at least 1)")]
    InvalidExpiry(u32),

    #[error("Option set {0} declares no options")]
    EmptyOptionSet(&'static str),

    #[error("No threshold configuration for decision kind: {0}")]
    MissingDecisionKind(DecisionKind),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for decision configuration
pub type DecisionResult<T> = Result<T, DecisionError>;
