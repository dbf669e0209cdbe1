//! Repository implementations
//!
//! PostgreSQL and in-process implementations of the repository traits defined
//! in interaction-core.

mod error;
mod interaction;
mod memory;

pub use error::{map_db_error, UNDEFINED_TABLE};
pub use interaction::PgInteractionRepository;
pub use memory::MemoryInteractionRepository;
