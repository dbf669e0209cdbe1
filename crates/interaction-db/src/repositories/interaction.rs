//! PostgreSQL implementation of InteractionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use interaction_core::entities::InteractionRecord;
use interaction_core::error::DomainError;
use interaction_core::traits::{InteractionRepository, RepoResult};
use interaction_core::value_objects::{ReactionKind, SubjectId, SubjectKind, UserId};

use crate::mappers::InteractionInsert;
use crate::models::{InteractionCountModel, InteractionModel};

use super::error::map_db_error;

/// SQL text for one subject kind's table
///
/// Table and column names come from `SubjectKind`'s static strings, never from
/// request input.
#[derive(Debug, Clone)]
struct InteractionSql {
    find_by_pair: String,
    insert: String,
    update: String,
    find_by_subject: String,
    find_by_user: String,
    count_by_kind: String,
}

impl InteractionSql {
    fn for_kind(kind: SubjectKind) -> Self {
        let table = kind.table();
        let subject = kind.subject_column();
        let columns = format!("id, {subject} AS subject_id, user_id, kind, created_at, updated_at");

        Self {
            find_by_pair: format!(
                "SELECT {columns} FROM {table} WHERE {subject} = $1 AND user_id = $2"
            ),
            insert: format!(
                "INSERT INTO {table} (id, {subject}, user_id, kind, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING {columns}"
            ),
            update: format!(
                "UPDATE {table} SET kind = $2, updated_at = NOW() WHERE id = $1 RETURNING {columns}"
            ),
            find_by_subject: format!(
                "SELECT {columns} FROM {table} WHERE {subject} = $1 ORDER BY created_at"
            ),
            find_by_user: format!(
                "SELECT {columns} FROM {table} WHERE user_id = $1 ORDER BY updated_at DESC"
            ),
            count_by_kind: format!(
                "SELECT kind, COUNT(*) AS count FROM {table} WHERE {subject} = $1 GROUP BY kind"
            ),
        }
    }
}

/// PostgreSQL implementation of InteractionRepository
///
/// One instance serves one subject kind (`post_interactions` or
/// `comment_interactions`).
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
    kind: SubjectKind,
    sql: InteractionSql,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository for a subject kind
    pub fn new(pool: PgPool, kind: SubjectKind) -> Self {
        Self {
            pool,
            kind,
            sql: InteractionSql::for_kind(kind),
        }
    }

    /// Subject kind this repository stores
    pub fn kind(&self) -> SubjectKind {
        self.kind
    }
}

fn into_records(models: Vec<InteractionModel>) -> RepoResult<Vec<InteractionRecord>> {
    models.into_iter().map(InteractionRecord::try_from).collect()
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_by_pair(
        &self,
        subject_id: &SubjectId,
        user_id: &UserId,
    ) -> RepoResult<Option<InteractionRecord>> {
        let result = sqlx::query_as::<_, InteractionModel>(&self.sql.find_by_pair)
            .bind(subject_id.as_str())
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(InteractionRecord::try_from).transpose()
    }

    #[instrument(skip(self, record), fields(kind = %self.kind, id = %record.id))]
    async fn create(&self, record: &InteractionRecord) -> RepoResult<InteractionRecord> {
        let insert = InteractionInsert::new(record);

        let model = sqlx::query_as::<_, InteractionModel>(&self.sql.insert)
            .bind(insert.id)
            .bind(insert.subject_id)
            .bind(insert.user_id)
            .bind(insert.kind)
            .bind(insert.created_at)
            .bind(insert.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        InteractionRecord::try_from(model)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn update(&self, id: Uuid, kind: ReactionKind) -> RepoResult<InteractionRecord> {
        let model = sqlx::query_as::<_, InteractionModel>(&self.sql.update)
            .bind(id)
            .bind(kind.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::RecordNotFound(id))?;

        InteractionRecord::try_from(model)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_by_subject(&self, subject_id: &SubjectId) -> RepoResult<Vec<InteractionRecord>> {
        let results = sqlx::query_as::<_, InteractionModel>(&self.sql.find_by_subject)
            .bind(subject_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_records(results)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<InteractionRecord>> {
        let results = sqlx::query_as::<_, InteractionModel>(&self.sql.find_by_user)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_records(results)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn count_by_kind(&self, subject_id: &SubjectId) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let results = sqlx::query_as::<_, InteractionCountModel>(&self.sql.count_by_kind)
            .bind(subject_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        results
            .into_iter()
            .map(<(ReactionKind, i64)>::try_from)
            .collect()
    }
}
