//! Domain traits (ports)

mod repositories;

pub use repositories::{InteractionRepository, RepoResult};
