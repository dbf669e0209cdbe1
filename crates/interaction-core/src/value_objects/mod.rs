//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction_kind;
mod subject_kind;

pub use ids::{IdParseError, SubjectId, UserId};
pub use reaction_kind::{ReactionKind, ReactionKindParseError};
pub use subject_kind::SubjectKind;
