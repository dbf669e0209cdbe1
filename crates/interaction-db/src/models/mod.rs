//! Database models - SQLx-compatible structs for PostgreSQL tables

mod interaction;

pub use interaction::{InteractionCountModel, InteractionModel};
