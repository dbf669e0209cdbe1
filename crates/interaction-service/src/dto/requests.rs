//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Presence of the subject ID and the action is checked separately so the
//! caller gets a kind-specific message ("Post ID is required").

use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use interaction_core::{DomainError, ReactionKind, SubjectId, SubjectKind, UserId};

// ============================================================================
// Interaction Requests
// ============================================================================

/// React to a post (`postId`) or a comment (`commentId`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    #[validate(length(max = 255, message = "Post ID must be at most 255 characters"))]
    pub post_id: Option<String>,

    #[validate(length(max = 255, message = "Comment ID must be at most 255 characters"))]
    pub comment_id: Option<String>,

    /// "like" or "dislike"
    #[validate(length(max = 16, message = "Action must be at most 16 characters"))]
    pub action: Option<String>,
}

impl ReactRequest {
    /// Subject ID for the given kind
    ///
    /// # Errors
    /// `MissingParameter` when the kind's ID field is absent or blank
    pub fn subject_id(&self, kind: SubjectKind) -> Result<SubjectId, DomainError> {
        let raw = match kind {
            SubjectKind::Post => self.post_id.as_deref(),
            SubjectKind::Comment => self.comment_id.as_deref(),
        };
        parse_subject_id(kind, raw)
    }

    /// Requested reaction
    ///
    /// # Errors
    /// `ValidationError` when absent, `InvalidReaction` for anything but like/dislike
    pub fn reaction(&self) -> Result<ReactionKind, DomainError> {
        let raw = self
            .action
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| DomainError::ValidationError("action is required".to_string()))?;

        raw.parse()
            .map_err(|_| DomainError::InvalidReaction(raw.to_string()))
    }
}

/// Query string of the stats endpoint (`?postId=..&userId=..`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub subject_id: SubjectId,
    pub user_id: Option<UserId>,
}

impl StatsQuery {
    /// Read the kind's ID parameter and the optional `userId`
    ///
    /// A blank `userId` is treated as absent.
    ///
    /// # Errors
    /// `MissingParameter` when the ID parameter is absent or blank
    pub fn from_params(kind: SubjectKind, params: &HashMap<String, String>) -> Result<Self, DomainError> {
        let subject_id = parse_subject_id(kind, params.get(kind.id_param()).map(String::as_str))?;
        let user_id = params.get("userId").and_then(|raw| UserId::parse(raw).ok());

        Ok(Self {
            subject_id,
            user_id,
        })
    }
}

/// Parse a subject ID, reporting absence in the kind's own words
///
/// # Errors
/// `MissingParameter` when absent or blank
pub fn parse_subject_id(kind: SubjectKind, raw: Option<&str>) -> Result<SubjectId, DomainError> {
    raw.and_then(|raw| SubjectId::parse(raw).ok())
        .ok_or_else(|| DomainError::missing_subject_id(kind))
}
