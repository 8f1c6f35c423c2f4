//! Type-safe wrappers and enums for league data.

pub mod category;
pub mod ids;

pub use category::StatCategory;
pub use ids::{GameId, PlayerId, TeamId};
