//! # interaction-core
//!
//! Domain layer for post and comment reactions: value objects, entities, the
//! reaction state machine, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{InteractionRecord, InteractionState, InteractionStats, Transition};
pub use error::DomainError;
pub use traits::{InteractionRepository, RepoResult};
pub use value_objects::{
    IdParseError, ReactionKind, ReactionKindParseError, SubjectId, SubjectKind, UserId,
};
