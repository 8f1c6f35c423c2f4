//! Storage layer for the basketball league
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD operations for teams, players, games and stat lines
//! - `analysis`: Read-only team reports (record, game log, averages, leaders)
//! - `seed`: Sample league data

pub mod analysis;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeagueDatabase;
