//! Namespaced key-value store for slug <-> id mappings
//!
//! Each namespace (e.g. "course", "lesson") holds its own ordered set of
//! keys. Reverse lookups scan a namespace in insertion order and return the
//! first key holding the value.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Storage behind the slug cache. Injected wherever mappings are needed.
pub trait KeyValueStore {
    /// Insert or overwrite `key` in `namespace`. Overwriting keeps the key's position.
    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()>;

    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Returns whether a mapping was removed.
    fn remove_by_key(&mut self, namespace: &str, key: &str) -> Result<bool>;

    /// First key in insertion order whose value equals `value`.
    fn get_key_by_value(&self, namespace: &str, value: &str) -> Result<Option<String>>;

    /// All keys of a namespace in insertion order.
    fn keys(&self, namespace: &str) -> Result<Vec<String>>;
}

/// Process-local store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    namespaces: HashMap<String, Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let entries = self.namespaces.entry(namespace.to_string()).or_default();
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        tracing::debug!(namespace, key, "stored mapping");
        Ok(())
    }

    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        Ok(self.namespaces.get(namespace)
            .and_then(|entries| entries.iter().find(|(k, _)| k == key))
            .map(|(_, v)| v.clone()))
    }

    fn remove_by_key(&mut self, namespace: &str, key: &str) -> Result<bool> {
        let Some(entries) = self.namespaces.get_mut(namespace) else {
            return Ok(false);
        };
        let before = entries.len();
        entries.retain(|(k, _)| k != key);
        let removed = entries.len() != before;
        if removed {
            tracing::debug!(namespace, key, "removed mapping");
        }
        Ok(removed)
    }

    fn get_key_by_value(&self, namespace: &str, value: &str) -> Result<Option<String>> {
        Ok(self.namespaces.get(namespace)
            .and_then(|entries| entries.iter().find(|(_, v)| v == value))
            .map(|(k, _)| k.clone()))
    }

    fn keys(&self, namespace: &str) -> Result<Vec<String>> {
        Ok(self.namespaces.get(namespace)
            .map(|entries| entries.iter().map(|(k, _)| k.clone()).collect())
            .unwrap_or_default())
    }
}

/// SQLite-backed store; mappings survive restarts.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and ensure the schema exists.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(db_path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(SqliteStore { conn })
    }
}

/// Initialize the slug cache table
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS slug_cache (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (namespace, key)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_slug_cache_value ON slug_cache (namespace, value)",
        [],
    )?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        // Upsert keeps the row id, so reverse lookups stay in insertion order.
        self.conn.execute(
            "INSERT INTO slug_cache (namespace, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT (namespace, key)
             DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            params![namespace, key, value],
        )?;
        tracing::debug!(namespace, key, "stored mapping");
        Ok(())
    }

    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let value = self.conn.query_row(
            "SELECT value FROM slug_cache WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
            |row| row.get(0),
        ).optional()?;
        Ok(value)
    }

    fn remove_by_key(&mut self, namespace: &str, key: &str) -> Result<bool> {
        let deleted = self.conn.execute(
            "DELETE FROM slug_cache WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
        )?;
        if deleted > 0 {
            tracing::debug!(namespace, key, "removed mapping");
        }
        Ok(deleted > 0)
    }

    fn get_key_by_value(&self, namespace: &str, value: &str) -> Result<Option<String>> {
        let key = self.conn.query_row(
            "SELECT key FROM slug_cache WHERE namespace = ?1 AND value = ?2 ORDER BY id LIMIT 1",
            params![namespace, value],
            |row| row.get(0),
        ).optional()?;
        Ok(key)
    }

    fn keys(&self, namespace: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT key FROM slug_cache WHERE namespace = ?1 ORDER BY id"
        )?;
        let keys = stmt.query_map(params![namespace], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }
}

// ============= Python Bindings =============

#[cfg(feature = "python")]
fn open_store(db_path: &str) -> PyResult<SqliteStore> {
    SqliteStore::open(db_path)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "slug_put")]
pub fn py_slug_put(db_path: &str, namespace: &str, key: &str, value: &str) -> PyResult<()> {
    open_store(db_path)?
        .put(namespace, key, value)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "slug_get")]
pub fn py_slug_get(db_path: &str, namespace: &str, key: &str) -> PyResult<Option<String>> {
    open_store(db_path)?
        .get(namespace, key)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "slug_remove")]
pub fn py_slug_remove(db_path: &str, namespace: &str, key: &str) -> PyResult<bool> {
    open_store(db_path)?
        .remove_by_key(namespace, key)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "slug_key_for")]
pub fn py_slug_key_for(db_path: &str, namespace: &str, value: &str) -> PyResult<Option<String>> {
    open_store(db_path)?
        .get_key_by_value(namespace, value)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}
