//! # interaction-db
//!
//! Persistence layer implementing `InteractionRepository` from `interaction-core`.
//!
//! ## Overview
//!
//! - Connection pool management and the reference schema
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgInteractionRepository`, one instance per subject kind
//! - `MemoryInteractionRepository`, an in-process store with the same
//!   uniqueness guarantee
//!
//! ## Usage
//!
//! ```rust,ignore
//! use interaction_db::pool::{create_pool, DatabaseConfig};
//! use interaction_db::PgInteractionRepository;
//! use interaction_core::{InteractionRepository, SubjectKind};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::with_url("postgres://localhost/interactions");
//!     let pool = create_pool(&config).await?;
//!     let posts = PgInteractionRepository::new(pool, SubjectKind::Post);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{map_db_error, MemoryInteractionRepository, PgInteractionRepository};
