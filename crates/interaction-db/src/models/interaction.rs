//! Interaction database model
//!
//! Both `post_interactions` and `comment_interactions` map onto the same row
//! shape; queries alias the subject column to `subject_id`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an interaction row
#[derive(Debug, Clone, FromRow)]
pub struct InteractionModel {
    pub id: Uuid,
    pub subject_id: String,
    pub user_id: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct InteractionCountModel {
    pub kind: String,
    pub count: i64,
}
