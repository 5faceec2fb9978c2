//! Input error types.
//!
//! Every derivation in this crate is total; these errors only surface when
//! user-supplied text (flags, config values, mastery assignments) is parsed
//! into the strongly typed model.

use thiserror::Error;

/// Errors raised while turning user input into planner inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    /// The subject key does not name one of the known subjects.
    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    /// The intensity preset is not steady, aggressive, or revision.
    #[error("unknown intensity: {0} (expected steady, aggressive, or revision)")]
    UnknownIntensity(String),

    /// The difficulty is not foundation, intermediate, advanced, or mixed.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// The resource kind is not one of the catalogued kinds.
    #[error("unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// A mastery score above 100.
    #[error("mastery for {subject} must be between 0 and 100, got {value}")]
    MasteryOutOfRange { subject: String, value: i64 },

    /// A mastery assignment that is not of the form `subject=value`.
    #[error("invalid mastery assignment '{0}', expected subject=value")]
    MalformedAssignment(String),
}

impl StudyError {
    /// Returns `true` if the error came from an unrecognised identifier
    /// rather than a bad value.
    pub fn is_unknown_key(&self) -> bool {
        matches!(
            self,
            StudyError::UnknownSubject(_)
                | StudyError::UnknownIntensity(_)
                | StudyError::UnknownDifficulty(_)
                | StudyError::UnknownResourceKind(_)
        )
    }
}
