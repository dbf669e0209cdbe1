//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use interaction_core::entities::{InteractionRecord, InteractionStats};

use super::responses::{InteractionRecordResponse, InteractionStatsResponse};

impl From<&InteractionStats> for InteractionStatsResponse {
    fn from(stats: &InteractionStats) -> Self {
        Self {
            subject_id: stats.subject_id.to_string(),
            like_count: stats.like_count,
            dislike_count: stats.dislike_count,
            current_user_reaction: stats.current_user_reaction,
        }
    }
}

impl From<InteractionStats> for InteractionStatsResponse {
    fn from(stats: InteractionStats) -> Self {
        Self::from(&stats)
    }
}

impl From<&InteractionRecord> for InteractionRecordResponse {
    fn from(record: &InteractionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            subject_id: record.subject_id.to_string(),
            user_id: record.user_id.to_string(),
            kind: record.kind,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<InteractionRecord> for InteractionRecordResponse {
    fn from(record: InteractionRecord) -> Self {
        Self::from(&record)
    }
}
