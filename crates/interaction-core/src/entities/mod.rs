//! Domain entities - core business objects

mod interaction;
mod state;
mod stats;

pub use interaction::InteractionRecord;
pub use state::{InteractionState, Transition};
pub use stats::InteractionStats;
