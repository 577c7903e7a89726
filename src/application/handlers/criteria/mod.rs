//! Criteria command handlers.

mod add_mark;
mod normalize_criterion;
mod rank_criteria;
mod register_criterion;
mod remove_criterion;
mod set_direction;
mod update_mark;

pub use add_mark::{AddMarkCommand, AddMarkHandler};
pub use normalize_criterion::{NormalizeCriterionCommand, NormalizeCriterionHandler};
pub use rank_criteria::{RankCriteriaCommand, RankCriteriaHandler};
pub use register_criterion::{RegisterCriterionCommand, RegisterCriterionHandler};
pub use remove_criterion::{RemoveCriterionCommand, RemoveCriterionHandler};
pub use set_direction::{SetDirectionCommand, SetDirectionHandler};
pub use update_mark::{UpdateMarkCommand, UpdateMarkHandler, UpdateMarkResult};
