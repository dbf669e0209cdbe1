//! Interaction entity <-> model mapper

use chrono::{DateTime, Utc};
use uuid::Uuid;

use interaction_core::entities::InteractionRecord;
use interaction_core::error::DomainError;
use interaction_core::value_objects::{ReactionKind, SubjectId, UserId};

use crate::models::{InteractionCountModel, InteractionModel};

/// Parse a stored reaction kind
///
/// The column carries a CHECK constraint, so anything else means the schema
/// and the code disagree.
pub fn parse_kind(raw: &str) -> Result<ReactionKind, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::DatabaseError(format!("unexpected reaction kind in storage: {raw}")))
}

/// Convert InteractionModel to InteractionRecord entity
impl TryFrom<InteractionModel> for InteractionRecord {
    type Error = DomainError;

    fn try_from(model: InteractionModel) -> Result<Self, Self::Error> {
        Ok(InteractionRecord {
            id: model.id,
            kind: parse_kind(&model.kind)?,
            subject_id: SubjectId::from_trusted(model.subject_id),
            user_id: UserId::from_trusted(model.user_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a count row into a (kind, count) pair
impl TryFrom<InteractionCountModel> for (ReactionKind, i64) {
    type Error = DomainError;

    fn try_from(model: InteractionCountModel) -> Result<Self, Self::Error> {
        Ok((parse_kind(&model.kind)?, model.count))
    }
}

/// Borrowed view of an InteractionRecord for database insertion
pub struct InteractionInsert<'a> {
    pub id: Uuid,
    pub subject_id: &'a str,
    pub user_id: &'a str,
    pub kind: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> InteractionInsert<'a> {
    pub fn new(record: &'a InteractionRecord) -> Self {
        Self {
            id: record.id,
            subject_id: record.subject_id.as_str(),
            user_id: record.user_id.as_str(),
            kind: record.kind.as_str(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
