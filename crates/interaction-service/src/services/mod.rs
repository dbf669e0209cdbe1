//! Business logic services
//!
//! The reaction state machine is applied here, against whichever
//! `InteractionRepository` the context holds for a subject kind.

pub mod aggregator;
pub mod context;
pub mod error;
pub mod interaction;

// Re-export all services for convenience
pub use aggregator::InteractionAggregator;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use interaction::InteractionService;
