//! Interaction service
//!
//! Applies a user's like/dislike to a post or comment and reports the
//! resulting stats.

use interaction_core::entities::{
    InteractionRecord, InteractionState, InteractionStats, Transition,
};
use interaction_core::traits::InteractionRepository;
use interaction_core::{DomainError, ReactionKind, SubjectId, SubjectKind, UserId};
use tracing::{info, instrument, warn};

use super::aggregator::InteractionAggregator;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Interaction service for one subject kind
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
    kind: SubjectKind,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext, kind: SubjectKind) -> Self {
        Self { ctx, kind }
    }

    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    fn repo(&self) -> &'a dyn InteractionRepository {
        self.ctx.interaction_repo(self.kind)
    }

    fn duplicate(&self, kind: ReactionKind) -> DomainError {
        DomainError::DuplicateReaction {
            kind,
            subject: self.kind,
        }
    }

    /// Record a reaction and return the subject's fresh stats
    ///
    /// Repeating the reaction the user already has fails with
    /// `DuplicateReaction`; the opposite reaction replaces it.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn react(
        &self,
        subject_id: &SubjectId,
        user_id: &UserId,
        desired: ReactionKind,
    ) -> ServiceResult<InteractionStats> {
        let current = self.repo().find_by_pair(subject_id, user_id).await?;
        let transition = InteractionState::of(current.as_ref()).transition(desired);

        match (transition, current) {
            (Transition::Reject(kind), _) => return Err(self.duplicate(kind).into()),
            (Transition::Change { from, to }, Some(existing)) => {
                self.repo().update(existing.id, to).await?;
                info!(
                    subject_id = %subject_id,
                    user_id = %user_id,
                    from = %from,
                    to = %to,
                    "Interaction changed"
                );
            }
            (Transition::Create(kind), _) | (Transition::Change { to: kind, .. }, None) => {
                self.create(subject_id, user_id, kind).await?;
            }
        }

        self.stats(subject_id, Some(user_id)).await
    }

    /// Insert a first reaction, resolving a lost race against another writer
    async fn create(
        &self,
        subject_id: &SubjectId,
        user_id: &UserId,
        kind: ReactionKind,
    ) -> ServiceResult<InteractionRecord> {
        let record = InteractionRecord::new(subject_id.clone(), user_id.clone(), kind);

        match self.repo().create(&record).await {
            Ok(created) => {
                info!(
                    subject_id = %subject_id,
                    user_id = %user_id,
                    reaction = %kind,
                    "Interaction created"
                );
                Ok(created)
            }
            Err(DomainError::ConstraintViolation) => self.resolve_conflict(&record).await,
            Err(e) => Err(e.into()),
        }
    }

    /// Another request created the pair's record between our read and write
    async fn resolve_conflict(&self, record: &InteractionRecord) -> ServiceResult<InteractionRecord> {
        let winner = self
            .repo()
            .find_by_pair(&record.subject_id, &record.user_id)
            .await?;

        warn!(
            subject_id = %record.subject_id,
            user_id = %record.user_id,
            reaction = %record.kind,
            winner = ?winner.as_ref().map(|w| w.kind),
            "Concurrent interaction write, resolving"
        );

        match winner {
            Some(winner) if winner.kind == record.kind => Err(self.duplicate(record.kind).into()),
            Some(winner) => Ok(self.repo().update(winner.id, record.kind).await?),
            // Winner vanished again (parent deleted); one plain retry
            None => Ok(self.repo().create(record).await?),
        }
    }

    /// Current stats for a subject
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn stats(
        &self,
        subject_id: &SubjectId,
        user_id: Option<&UserId>,
    ) -> ServiceResult<InteractionStats> {
        let stats = InteractionAggregator::new(self.repo())
            .get_stats(subject_id, user_id)
            .await?;
        Ok(stats)
    }

    /// Every reaction a user has left on this subject kind, newest first
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn user_interactions(&self, user_id: &UserId) -> ServiceResult<Vec<InteractionRecord>> {
        Ok(self.repo().find_by_user(user_id).await?)
    }
}
