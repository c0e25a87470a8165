//! Client-local key/value storage
//!
//! Mirrors the browser's local storage: string values under string keys.
//! [`SqliteStore`] persists them in a small SQLite database under the user
//! data directory; [`MemoryStore`] keeps them in memory for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::StoreError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, StoreError>;

/// String key/value storage
pub trait LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// SQLite-backed store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the store at the default data location
    pub fn open() -> Result<Self> {
        Self::open_at(&Self::data_dir()?)
    }

    /// Get the data directory path (~/.local/share/skyquote on Linux)
    pub fn data_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(StoreError::NoHome)?;
        Ok(base.join("skyquote"))
    }

    /// Open the store inside a specific directory
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| StoreError::Io(format!("Failed to create data dir: {}", e)))?;

        let db_path = dir.join("local-storage.db");
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Local storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| StoreError::Io(format!("Failed to remove old store: {}", e)))?;
            return Self::open_at(dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        log::debug!("Opened local storage at {}", db_path.display());
        Ok(Self { conn })
    }
}

impl LocalStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO key_value (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, chrono::Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM key_value WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get_item("k").unwrap().is_none());

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        store.remove_item("k").unwrap();
        assert!(store.get_item("k").unwrap().is_none());
    }

    #[test]
    fn test_sqlite_store_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = SqliteStore::open_at(temp.path()).unwrap();

        store.set_item("companyProfile", "first").unwrap();
        store.set_item("companyProfile", "second").unwrap();

        assert_eq!(
            store.get_item("companyProfile").unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_sqlite_store_persists_across_opens() {
        let temp = TempDir::new().unwrap();
        {
            let mut store = SqliteStore::open_at(temp.path()).unwrap();
            store.set_item("key", "value").unwrap();
        }

        let store = SqliteStore::open_at(temp.path()).unwrap();
        assert_eq!(store.get_item("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_sqlite_store_remove_missing_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut store = SqliteStore::open_at(temp.path()).unwrap();

        store.remove_item("absent").unwrap();
        assert!(store.get_item("absent").unwrap().is_none());
    }

    #[test]
    fn test_sqlite_store_creates_nested_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        SqliteStore::open_at(&nested).unwrap();

        assert!(nested.join("local-storage.db").exists());
    }
}
