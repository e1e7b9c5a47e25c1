//! SQLite connection wrapper, one per CLI invocation.
//!
//! The store is single-writer, single-reader-at-a-time: every command opens
//! its own connection, uses it synchronously and drops it on exit.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "busy_timeout", 5000)?;
        Ok(Self { conn })
    }
}
