//! Interaction record entity - one user's reaction to one subject

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::{ReactionKind, SubjectId, UserId};

/// Persisted reaction of a user to a post or comment
///
/// At most one record exists per (subject_id, user_id) pair; storage enforces
/// this with a unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRecord {
    pub id: Uuid,
    pub subject_id: SubjectId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InteractionRecord {
    /// Create a new record with a fresh ID
    pub fn new(subject_id: SubjectId, user_id: UserId, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject_id,
            user_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the record belongs to a (subject, user) pair
    #[inline]
    pub fn is_pair(&self, subject_id: &SubjectId, user_id: &UserId) -> bool {
        &self.subject_id == subject_id && &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let subject = SubjectId::parse("post-1").unwrap();
        let user = UserId::parse("user-1").unwrap();
        let record = InteractionRecord::new(subject.clone(), user.clone(), ReactionKind::Like);

        assert_eq!(record.kind, ReactionKind::Like);
        assert_eq!(record.created_at, record.updated_at);
        assert!(record.is_pair(&subject, &user));
        assert!(!record.is_pair(&subject, &UserId::parse("user-2").unwrap()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = InteractionRecord::new(
            SubjectId::parse("post-1").unwrap(),
            UserId::parse("user-1").unwrap(),
            ReactionKind::Like,
        );
        let b = InteractionRecord::new(
            SubjectId::parse("post-1").unwrap(),
            UserId::parse("user-1").unwrap(),
            ReactionKind::Like,
        );
        assert_ne!(a.id, b.id);
    }
}
