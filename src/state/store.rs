/// The persistent key-value store backed by SQLite
///
/// Keys are opaque strings, values are strings. The app uses two keys:
/// the serialized favorites list and the display name. Reads of absent
/// keys yield `None`, never an error; writes are full overwrites.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::path::PathBuf;
use thiserror::Error;

/// Store key holding the serialized favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Store key holding the raw display name
pub const USER_KEY: &str = "cinecritix_user";

/// Errors from the underlying SQLite store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Database(#[from] rusqlite::Error),
}

/// The Store manages the SQLite key-value database.
pub struct Store {
    conn: Connection,
    db_path: PathBuf,
}

impl Store {
    /// Create a new Store instance and initialize the database.
    ///
    /// The database file is created in the user's data directory:
    /// - Linux: ~/.local/share/cinecritix/cinecritix.db
    /// - macOS: ~/Library/Application Support/cinecritix/cinecritix.db
    /// - Windows: %APPDATA%\cinecritix\cinecritix.db
    pub fn new() -> Result<Self, StoreError> {
        let db_path = Self::get_db_path();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        // Open or create the database
        let conn = Connection::open(&db_path)?;

        println!("📁 Store initialized at: {}", db_path.display());

        let store = Store { conn, db_path };
        store.init_schema()?;

        Ok(store)
    }

    /// Get the path where the database should be stored
    fn get_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user data directory");

        path.push("cinecritix");
        path.push("cinecritix.db");
        path
    }

    /// Initialize the database schema.
    /// Creates the key-value table if it doesn't exist.
    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL,
                updated_at      INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Read the value stored under `key`.
    /// An absent key is `Ok(None)`, not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    /// Overwrite the value stored under `key`
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, Utc::now().timestamp()],
        )?;

        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory() -> Store {
        let conn = Connection::open_in_memory().expect("Failed to open in-memory store");
        let store = Store {
            conn,
            db_path: PathBuf::new(),
        };
        store.init_schema().expect("Failed to initialize schema");
        store
    }

    #[test]
    fn test_absent_key_reads_none() {
        let store = in_memory();

        assert_eq!(store.get(FAVORITES_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let store = in_memory();

        store.set(USER_KEY, "Ana").unwrap();

        assert_eq!(store.get(USER_KEY).unwrap(), Some("Ana".to_string()));
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = in_memory();

        store.set(FAVORITES_KEY, "[]").unwrap();
        store.set(FAVORITES_KEY, "[{\"title\":\"x\"}]").unwrap();

        assert_eq!(
            store.get(FAVORITES_KEY).unwrap(),
            Some("[{\"title\":\"x\"}]".to_string())
        );
    }
}
