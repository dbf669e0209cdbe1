//! Interaction aggregator
//!
//! Stats are recomputed from stored records on every call; nothing is cached.

use interaction_core::entities::InteractionStats;
use interaction_core::traits::{InteractionRepository, RepoResult};
use interaction_core::{SubjectId, UserId};
use tracing::{debug, instrument};

/// Computes like/dislike totals for one subject
pub struct InteractionAggregator<'a> {
    repo: &'a dyn InteractionRepository,
}

impl<'a> InteractionAggregator<'a> {
    pub fn new(repo: &'a dyn InteractionRepository) -> Self {
        Self { repo }
    }

    /// Stats for a subject, with the requesting user's reaction when known
    ///
    /// A subject nobody has reacted to yields zero counts; that is not an error.
    #[instrument(skip(self))]
    pub async fn get_stats(
        &self,
        subject_id: &SubjectId,
        user_id: Option<&UserId>,
    ) -> RepoResult<InteractionStats> {
        let counts = self.repo.count_by_kind(subject_id).await?;

        let current_user_reaction = match user_id {
            Some(user_id) => self
                .repo
                .find_by_pair(subject_id, user_id)
                .await?
                .map(|record| record.kind),
            None => None,
        };

        let stats = InteractionStats::from_counts(subject_id.clone(), &counts, current_user_reaction);
        debug!(
            like_count = stats.like_count,
            dislike_count = stats.dislike_count,
            "Computed interaction stats"
        );

        Ok(stats)
    }
}
