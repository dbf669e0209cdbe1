//! Subject kind - which family of content an interaction belongs to
//!
//! Posts and comments share one interaction state machine. Everything that
//! differs between them (URL segment, request parameter, storage table) hangs
//! off this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity that can receive reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Post,
    Comment,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 2] = [SubjectKind::Post, SubjectKind::Comment];

    /// URL path segment (`/posts/...`, `/comments/...`)
    #[inline]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Post => "posts",
            Self::Comment => "comments",
        }
    }

    /// Name of the subject ID in query strings and request bodies
    #[inline]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Post => "postId",
            Self::Comment => "commentId",
        }
    }

    /// Lowercase label for messages ("post", "comment")
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }

    /// Capitalized label for the start of messages ("Post", "Comment")
    #[inline]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Comment => "Comment",
        }
    }

    /// Table holding this kind's interaction records
    #[inline]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Post => "post_interactions",
            Self::Comment => "comment_interactions",
        }
    }

    /// Column referencing the subject in [`Self::table`]
    #[inline]
    pub const fn subject_column(self) -> &'static str {
        match self {
            Self::Post => "post_id",
            Self::Comment => "comment_id",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
