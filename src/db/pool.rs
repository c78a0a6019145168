//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection per invocation; opened, used, dropped. No cross-call
//! transaction is ever held.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
