//! Opaque identifiers supplied by collaborators outside this subsystem
//!
//! Posts, comments and users are owned elsewhere on the platform. Their IDs are
//! carried as trimmed, non-empty strings and never interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an opaque identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier is empty")]
    Empty,
}

fn normalize(raw: &str) -> Result<String, IdParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdParseError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Identifier of the post or comment being reacted to
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Parse a subject ID, rejecting blank input
    pub fn parse(raw: &str) -> Result<Self, IdParseError> {
        normalize(raw).map(Self)
    }

    /// Wrap a value already known to be valid (e.g. read back from storage)
    #[inline]
    pub fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the acting user, as issued by the authentication provider
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse a user ID, rejecting blank input
    pub fn parse(raw: &str) -> Result<Self, IdParseError> {
        normalize(raw).map(Self)
    }

    /// Wrap a value already known to be valid (e.g. read back from storage)
    #[inline]
    pub fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = SubjectId::parse("  post-42 ").unwrap();
        assert_eq!(id.as_str(), "post-42");
        assert_eq!(id.to_string(), "post-42");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(SubjectId::parse(""), Err(IdParseError::Empty));
        assert_eq!(UserId::parse("   "), Err(IdParseError::Empty));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = UserId::parse("user-7").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-7\"");

        let parsed: UserId = serde_json::from_str("\"user-7\"").unwrap();
        assert_eq!(parsed, id);
    }
}
