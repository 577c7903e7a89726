//! Alternative command handlers.

mod assign_profile;
mod register_alternative;
mod remove_alternative;

pub use assign_profile::{AssignProfileCommand, AssignProfileHandler};
pub use register_alternative::{RegisterAlternativeCommand, RegisterAlternativeHandler};
pub use remove_alternative::{RemoveAlternativeCommand, RemoveAlternativeHandler};
