//! Entity to model mappers
//!
//! This module provides conversions between domain entities (interaction-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod interaction;

pub use interaction::{parse_kind, InteractionInsert};
