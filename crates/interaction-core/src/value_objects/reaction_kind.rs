//! Reaction kind - the closed set of reactions a user can leave

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's reaction to a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// All reaction kinds, in display order
    pub const ALL: [ReactionKind; 2] = [ReactionKind::Like, ReactionKind::Dislike];

    /// Storage and wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Past-tense verb used in user-facing messages ("liked", "disliked")
    #[inline]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Dislike => "disliked",
        }
    }

    /// The other reaction
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a ReactionKind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reaction '{0}': expected 'like' or 'dislike'")]
pub struct ReactionKindParseError(pub String);

impl FromStr for ReactionKind {
    type Err = ReactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            _ => Err(ReactionKindParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("like".parse::<ReactionKind>().unwrap(), ReactionKind::Like);
        assert_eq!(" Dislike ".parse::<ReactionKind>().unwrap(), ReactionKind::Dislike);
        assert!("love".parse::<ReactionKind>().is_err());
        assert!("".parse::<ReactionKind>().is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ReactionKind::Like.opposite(), ReactionKind::Dislike);
        assert_eq!(ReactionKind::Dislike.opposite(), ReactionKind::Like);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&ReactionKind::Dislike).unwrap(), "\"dislike\"");
        let kind: ReactionKind = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(kind, ReactionKind::Like);
    }

    #[test]
    fn test_past_tense() {
        assert_eq!(ReactionKind::Like.past_tense(), "liked");
        assert_eq!(ReactionKind::Dislike.past_tense(), "disliked");
    }
}
