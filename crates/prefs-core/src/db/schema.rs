//! Preferences table layout
//!
//! One row per field, keyed by the stable field identifier. There is no
//! version table; the layout is fixed.

use crate::error::Result;
use rusqlite::Connection;

/// Create the preferences table if it is missing
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
