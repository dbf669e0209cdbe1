//! In-process implementation of InteractionRepository
//!
//! Keeps records in a map keyed by (subject, user). The key doubles as the
//! unique constraint, checked and written under one write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use interaction_core::entities::InteractionRecord;
use interaction_core::error::DomainError;
use interaction_core::traits::{InteractionRepository, RepoResult};
use interaction_core::value_objects::{ReactionKind, SubjectId, UserId};

type PairKey = (SubjectId, UserId);

/// In-memory interaction store for one subject kind
#[derive(Debug, Clone, Default)]
pub struct MemoryInteractionRepository {
    records: Arc<RwLock<HashMap<PairKey, InteractionRecord>>>,
}

impl MemoryInteractionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl InteractionRepository for MemoryInteractionRepository {
    async fn find_by_pair(
        &self,
        subject_id: &SubjectId,
        user_id: &UserId,
    ) -> RepoResult<Option<InteractionRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(subject_id.clone(), user_id.clone()))
            .cloned())
    }

    async fn create(&self, record: &InteractionRecord) -> RepoResult<InteractionRecord> {
        let mut records = self.records.write().await;
        let key = (record.subject_id.clone(), record.user_id.clone());

        if records.contains_key(&key) {
            return Err(DomainError::ConstraintViolation);
        }

        records.insert(key, record.clone());
        Ok(record.clone())
    }

    async fn update(&self, id: Uuid, kind: ReactionKind) -> RepoResult<InteractionRecord> {
        let mut records = self.records.write().await;
        let record = records
            .values_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;

        record.kind = kind;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn find_by_subject(&self, subject_id: &SubjectId) -> RepoResult<Vec<InteractionRecord>> {
        let records = self.records.read().await;
        let mut found: Vec<_> = records
            .values()
            .filter(|r| &r.subject_id == subject_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }

    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<InteractionRecord>> {
        let records = self.records.read().await;
        let mut found: Vec<_> = records
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(found)
    }

    async fn count_by_kind(&self, subject_id: &SubjectId) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let records = self.records.read().await;
        let counts = ReactionKind::ALL
            .into_iter()
            .map(|kind| {
                let count = records
                    .values()
                    .filter(|r| &r.subject_id == subject_id && r.kind == kind)
                    .count();
                (kind, count as i64)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        Ok(counts)
    }
}
