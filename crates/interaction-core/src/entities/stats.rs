//! Aggregated interaction counts for a subject

use serde::Serialize;

use crate::value_objects::{ReactionKind, SubjectId};

/// Like/dislike totals plus the requesting user's own reaction
///
/// Always computed from stored records, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionStats {
    pub subject_id: SubjectId,
    pub like_count: i64,
    pub dislike_count: i64,
    pub current_user_reaction: Option<ReactionKind>,
}

impl InteractionStats {
    /// Stats for a subject nobody has reacted to
    pub fn empty(subject_id: SubjectId) -> Self {
        Self {
            subject_id,
            like_count: 0,
            dislike_count: 0,
            current_user_reaction: None,
        }
    }

    /// Build stats from grouped counts
    pub fn from_counts(
        subject_id: SubjectId,
        counts: &[(ReactionKind, i64)],
        current_user_reaction: Option<ReactionKind>,
    ) -> Self {
        let mut stats = Self::empty(subject_id);
        for (kind, count) in counts {
            match kind {
                ReactionKind::Like => stats.like_count += count,
                ReactionKind::Dislike => stats.dislike_count += count,
            }
        }
        stats.current_user_reaction = current_user_reaction;
        stats
    }

    /// Total number of reactions
    #[inline]
    pub fn total(&self) -> i64 {
        self.like_count + self.dislike_count
    }
}
