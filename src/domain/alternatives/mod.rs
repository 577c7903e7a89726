//! Alternatives module - the options being ranked and their mark profiles.

mod alternative;
mod profile;

pub use alternative::Alternative;
pub use profile::{Profile, Vector};
