//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::{ReactionKind, SubjectKind};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Caller Errors
    // =========================================================================
    /// A required identifier was omitted (e.g. "Post ID")
    #[error("{0} is required")]
    MissingParameter(String),

    #[error("Invalid reaction: {0}")]
    InvalidReaction(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already {} this {}", .kind.past_tense(), .subject)]
    DuplicateReaction {
        kind: ReactionKind,
        subject: SubjectKind,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Interaction not found: {0}")]
    RecordNotFound(Uuid),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Unique constraint on (subject, user) rejected a write
    #[error("Interaction already exists for this subject and user")]
    ConstraintViolation,

    /// The interaction tables are not provisioned in this deployment
    #[error("Interaction storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Missing identifier for a subject kind ("Post ID is required")
    pub fn missing_subject_id(kind: SubjectKind) -> Self {
        Self::MissingParameter(format!("{} ID", kind.title()))
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::InvalidReaction(_) => "INVALID_REACTION",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DuplicateReaction { .. } => "DUPLICATE_REACTION",
            Self::RecordNotFound(_) => "UNKNOWN_INTERACTION",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_))
    }

    /// Check if this is a caller error that should surface as 400
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::InvalidReaction(_)
                | Self::ValidationError(_)
                | Self::DuplicateReaction { .. }
        )
    }

    /// Check if this is a storage-level conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConstraintViolation)
    }

    /// Check if the interaction feature is not provisioned
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}
