//! Database initialization command

use super::open_database;
use crate::Result;
use std::path::Path;
use tracing::info;

/// Handle `init`: create tables, optionally wiping and/or seeding sample data
pub fn handle_init(db_path: &Path, sample: bool, clear: bool) -> Result<()> {
    // open_database creates any missing tables
    let mut db = open_database(db_path)?;

    if clear {
        info!("clearing existing league data");
        db.clear_all_data()?;
    }

    if sample {
        db.seed_sample_data()?;
        println!("✓ Sample league loaded into {}", db_path.display());
    } else {
        println!("✓ Database ready at {}", db_path.display());
    }
    Ok(())
}
