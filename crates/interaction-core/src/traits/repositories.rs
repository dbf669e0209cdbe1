//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::InteractionRecord;
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, SubjectId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Interaction Repository
// ============================================================================

/// Storage for interaction records of a single subject kind
///
/// Implementations must enforce uniqueness of (subject_id, user_id) themselves;
/// callers checking first is not enough under concurrent writers.
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Find the record for a (subject, user) pair
    async fn find_by_pair(
        &self,
        subject_id: &SubjectId,
        user_id: &UserId,
    ) -> RepoResult<Option<InteractionRecord>>;

    /// Insert a new record
    ///
    /// Fails with `DomainError::ConstraintViolation` if the pair already has one.
    async fn create(&self, record: &InteractionRecord) -> RepoResult<InteractionRecord>;

    /// Change the reaction of an existing record
    ///
    /// Fails with `DomainError::RecordNotFound` if the ID does not exist.
    async fn update(&self, id: Uuid, kind: ReactionKind) -> RepoResult<InteractionRecord>;

    /// All records for a subject, oldest first
    async fn find_by_subject(&self, subject_id: &SubjectId) -> RepoResult<Vec<InteractionRecord>>;

    /// All records left by a user, newest first
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<InteractionRecord>>;

    /// Count records for a subject grouped by reaction kind
    async fn count_by_kind(&self, subject_id: &SubjectId) -> RepoResult<Vec<(ReactionKind, i64)>>;
}
