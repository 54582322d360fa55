//! Error types for the vivarium engine.
//!
//! Recoverable errors double as user-facing status text: their `Display`
//! output is exactly what the request surface returns to the shell. The one
//! exception is [`WorldError::Corrupted`], which marks a broken ownership
//! invariant and must abort instead of being shown as a status line.

use thiserror::Error;
use vivarium_data::{PersonId, ThingId};

/// Main error type for world operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The supplied identity string is not a well-formed identity.
    #[error("'{0}' is not a valid identity. Maybe try a valid uuid?")]
    InvalidIdentity(String),

    /// A well-formed person identity that is absent from the registry.
    #[error("That person does not exist!")]
    PersonNotFound(PersonId),

    /// A well-formed thing identity that is absent from the registry.
    #[error("That thing does not exist!")]
    ThingNotFound(ThingId),

    /// Assignment target thing is missing (person exists).
    #[error("That thing doesn't exist!")]
    AssignThingMissing(ThingId),

    /// Assignment target person is missing (thing exists).
    #[error("That person doesn't exist!")]
    AssignPersonMissing(PersonId),

    /// Both assignment targets are missing.
    #[error("Neither that person nor the thing exist!")]
    AssignBothMissing,

    /// Reproduction was attempted without a living pair of parents.
    #[error("Was not able to find a mom and a dad!")]
    NoEligibleParents,

    /// A dangling ownership reference was detected. Never produced by the
    /// public mutation paths; any occurrence is an internal fault.
    #[error("ownership records corrupted: {0}")]
    Corrupted(String),
}

/// Result type alias for world operations.
pub type Result<T> = std::result::Result<T, WorldError>;

impl WorldError {
    /// Whether the error is an internal-consistency fault rather than a
    /// reportable status.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, WorldError::Corrupted(_))
    }
}
