//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subject or user id no other test run has used
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Body of `POST /api/v1/posts/interactions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReaction {
    pub post_id: String,
    pub action: String,
}

impl PostReaction {
    pub fn like(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            action: "like".to_string(),
        }
    }

    pub fn dislike(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            action: "dislike".to_string(),
        }
    }
}

/// Body of `POST /api/v1/comments/interactions`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReaction {
    pub comment_id: String,
    pub action: String,
}

impl CommentReaction {
    pub fn like(comment_id: &str) -> Self {
        Self {
            comment_id: comment_id.to_string(),
            action: "like".to_string(),
        }
    }
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Stats payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub subject_id: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub current_user_reaction: Option<String>,
}

/// Stored interaction payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub id: String,
    pub subject_id: String,
    pub user_id: String,
    pub kind: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
}
