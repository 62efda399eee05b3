// SPDX-License-Identifier: PMPL-1.0-or-later

//! Storage for block settings, module settings and module privacy.
//!
//! [`SqlSettingsStore`] keeps them in three SQLite tables named with a
//! configurable prefix (`wt_block_setting`, `wt_module_setting`,
//! `wt_module_privacy`). The store is synchronous: it owns a Tokio runtime
//! and blocks on each query.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_TABLE_PREFIX: &str = "wt_";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("could not start the database runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("invalid table prefix {0:?}: use letters, digits and underscores")]
    InvalidPrefix(String),
    #[error("unknown access level {0}")]
    UnknownAccessLevel(i64),
}

/// Rows behind module and block settings.
pub trait SettingsStore {
    fn block_setting(&self, block_id: i64, name: &str) -> Result<Option<String>, SettingsError>;

    /// Insert or replace.
    fn set_block_setting(&self, block_id: i64, name: &str, value: &str) -> Result<(), SettingsError>;

    /// Every setting of one module.
    fn module_settings(&self, module: &str) -> Result<BTreeMap<String, String>, SettingsError>;

    fn insert_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError>;

    fn update_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError>;

    fn access_level(&self, tree_id: i64, module: &str, component: &str) -> Result<Option<i64>, SettingsError>;

    fn set_access_level(
        &self,
        tree_id: i64,
        module: &str,
        component: &str,
        level: i64,
    ) -> Result<(), SettingsError>;
}

pub struct SqlSettingsStore {
    pool: SqlitePool,
    rt: tokio::runtime::Runtime,
    prefix: String,
}

impl SqlSettingsStore {
    /// Open (or create) the database at `url`, e.g. `sqlite://tree.db` or
    /// `sqlite::memory:`.
    pub fn connect(url: &str, prefix: &str) -> Result<Self, SettingsError> {
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SettingsError::InvalidPrefix(prefix.to_string()));
        }
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // One long-lived connection: an in-memory database lives and dies
        // with its connection.
        let future = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options);
        let pool = rt.block_on(future)?;
        info!(url, prefix, "connected to settings database");
        Ok(Self {
            pool,
            rt,
            prefix: prefix.to_string(),
        })
    }

    pub fn table_prefix(&self) -> &str {
        &self.prefix
    }

    /// Create the three tables if they do not exist yet.
    pub fn create_schema(&self) -> Result<(), SettingsError> {
        let p = &self.prefix;
        let statements = [
            format!(
                "CREATE TABLE IF NOT EXISTS {p}block_setting (
                    block_id INTEGER NOT NULL,
                    setting_name TEXT NOT NULL,
                    setting_value TEXT NOT NULL,
                    PRIMARY KEY (block_id, setting_name)
                )"
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {p}module_setting (
                    module_name TEXT NOT NULL,
                    setting_name TEXT NOT NULL,
                    setting_value TEXT NOT NULL,
                    PRIMARY KEY (module_name, setting_name)
                )"
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {p}module_privacy (
                    gedcom_id INTEGER NOT NULL,
                    module_name TEXT NOT NULL,
                    component TEXT NOT NULL,
                    access_level INTEGER NOT NULL,
                    PRIMARY KEY (gedcom_id, module_name, component)
                )"
            ),
        ];
        for sql in &statements {
            self.rt.block_on(sqlx::query(sql).execute(&self.pool))?;
        }
        debug!(prefix = %p, "settings schema ready");
        Ok(())
    }
}

impl Drop for SqlSettingsStore {
    fn drop(&mut self) {
        self.rt.block_on(self.pool.close());
    }
}

impl SettingsStore for SqlSettingsStore {
    fn block_setting(&self, block_id: i64, name: &str) -> Result<Option<String>, SettingsError> {
        let sql = format!(
            "SELECT setting_value FROM {}block_setting WHERE block_id = ? AND setting_name = ?",
            self.prefix
        );
        let future = sqlx::query_scalar::<_, String>(&sql)
            .bind(block_id)
            .bind(name)
            .fetch_optional(&self.pool);
        Ok(self.rt.block_on(future)?)
    }

    fn set_block_setting(&self, block_id: i64, name: &str, value: &str) -> Result<(), SettingsError> {
        let sql = format!(
            "REPLACE INTO {}block_setting (block_id, setting_name, setting_value) VALUES (?, ?, ?)",
            self.prefix
        );
        let future = sqlx::query(&sql)
            .bind(block_id)
            .bind(name)
            .bind(value)
            .execute(&self.pool);
        self.rt.block_on(future)?;
        debug!(block_id, name, "block setting saved");
        Ok(())
    }

    fn module_settings(&self, module: &str) -> Result<BTreeMap<String, String>, SettingsError> {
        let sql = format!(
            "SELECT setting_name, setting_value FROM {}module_setting WHERE module_name = ?",
            self.prefix
        );
        let future = sqlx::query_as::<_, (String, String)>(&sql)
            .bind(module)
            .fetch_all(&self.pool);
        let rows = self.rt.block_on(future)?;
        Ok(rows.into_iter().collect())
    }

    fn insert_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError> {
        let sql = format!(
            "INSERT INTO {}module_setting (module_name, setting_name, setting_value) VALUES (?, ?, ?)",
            self.prefix
        );
        let future = sqlx::query(&sql)
            .bind(module)
            .bind(name)
            .bind(value)
            .execute(&self.pool);
        self.rt.block_on(future)?;
        Ok(())
    }

    fn update_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError> {
        let sql = format!(
            "UPDATE {}module_setting SET setting_value = ? WHERE module_name = ? AND setting_name = ?",
            self.prefix
        );
        let future = sqlx::query(&sql)
            .bind(value)
            .bind(module)
            .bind(name)
            .execute(&self.pool);
        self.rt.block_on(future)?;
        Ok(())
    }

    fn access_level(&self, tree_id: i64, module: &str, component: &str) -> Result<Option<i64>, SettingsError> {
        let sql = format!(
            "SELECT access_level FROM {}module_privacy \
             WHERE gedcom_id = ? AND module_name = ? AND component = ?",
            self.prefix
        );
        let future = sqlx::query_scalar::<_, i64>(&sql)
            .bind(tree_id)
            .bind(module)
            .bind(component)
            .fetch_optional(&self.pool);
        Ok(self.rt.block_on(future)?)
    }

    fn set_access_level(
        &self,
        tree_id: i64,
        module: &str,
        component: &str,
        level: i64,
    ) -> Result<(), SettingsError> {
        let sql = format!(
            "REPLACE INTO {}module_privacy (gedcom_id, module_name, component, access_level) \
             VALUES (?, ?, ?, ?)",
            self.prefix
        );
        let future = sqlx::query(&sql)
            .bind(tree_id)
            .bind(module)
            .bind(component)
            .bind(level)
            .execute(&self.pool);
        self.rt.block_on(future)?;
        Ok(())
    }
}

/// In-process store. Counts its writes, so callers can check that an
/// unchanged value is not written again.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    blocks: RefCell<BTreeMap<(i64, String), String>>,
    modules: RefCell<BTreeMap<(String, String), String>>,
    privacy: RefCell<BTreeMap<(i64, String, String), i64>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module setting loads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Writes of any kind so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn wrote(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl SettingsStore for MemorySettingsStore {
    fn block_setting(&self, block_id: i64, name: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.blocks.borrow().get(&(block_id, name.to_string())).cloned())
    }

    fn set_block_setting(&self, block_id: i64, name: &str, value: &str) -> Result<(), SettingsError> {
        self.blocks
            .borrow_mut()
            .insert((block_id, name.to_string()), value.to_string());
        self.wrote();
        Ok(())
    }

    fn module_settings(&self, module: &str) -> Result<BTreeMap<String, String>, SettingsError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self
            .modules
            .borrow()
            .iter()
            .filter(|((owner, _), _)| owner == module)
            .map(|((_, name), value)| (name.clone(), value.clone()))
            .collect())
    }

    fn insert_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError> {
        self.modules
            .borrow_mut()
            .insert((module.to_string(), name.to_string()), value.to_string());
        self.wrote();
        Ok(())
    }

    fn update_module_setting(&self, module: &str, name: &str, value: &str) -> Result<(), SettingsError> {
        if let Some(stored) = self
            .modules
            .borrow_mut()
            .get_mut(&(module.to_string(), name.to_string()))
        {
            *stored = value.to_string();
        }
        self.wrote();
        Ok(())
    }

    fn access_level(&self, tree_id: i64, module: &str, component: &str) -> Result<Option<i64>, SettingsError> {
        Ok(self
            .privacy
            .borrow()
            .get(&(tree_id, module.to_string(), component.to_string()))
            .copied())
    }

    fn set_access_level(
        &self,
        tree_id: i64,
        module: &str,
        component: &str,
        level: i64,
    ) -> Result<(), SettingsError> {
        self.privacy
            .borrow_mut()
            .insert((tree_id, module.to_string(), component.to_string()), level);
        self.wrote();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> SqlSettingsStore {
        let store = SqlSettingsStore::connect("sqlite::memory:", DEFAULT_TABLE_PREFIX).unwrap();
        store.create_schema().unwrap();
        store
    }

    #[test]
    fn block_settings_replace() {
        let store = memory_db();
        assert_eq!(store.block_setting(7, "days").unwrap(), None);
        store.set_block_setting(7, "days", "30").unwrap();
        store.set_block_setting(7, "days", "14").unwrap();
        store.set_block_setting(8, "days", "1").unwrap();
        assert_eq!(store.block_setting(7, "days").unwrap().as_deref(), Some("14"));
        assert_eq!(store.block_setting(8, "days").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn module_settings_are_per_module() {
        let store = memory_db();
        store.insert_module_setting("clippings", "colour", "red").unwrap();
        store.insert_module_setting("clippings", "size", "10").unwrap();
        store.insert_module_setting("faq", "colour", "blue").unwrap();
        store.update_module_setting("clippings", "colour", "green").unwrap();

        let settings = store.module_settings("clippings").unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings["colour"], "green");
        assert_eq!(store.module_settings("faq").unwrap()["colour"], "blue");
        assert!(store.module_settings("missing").unwrap().is_empty());
    }

    #[test]
    fn privacy_rows() {
        let store = memory_db();
        assert_eq!(store.access_level(1, "faq", "menu").unwrap(), None);
        store.set_access_level(1, "faq", "menu", 1).unwrap();
        store.set_access_level(1, "faq", "menu", 2).unwrap();
        assert_eq!(store.access_level(1, "faq", "menu").unwrap(), Some(2));
        assert_eq!(store.access_level(2, "faq", "menu").unwrap(), None);
    }

    #[test]
    fn schema_is_idempotent_and_prefixed() {
        let store = SqlSettingsStore::connect("sqlite::memory:", "gen_").unwrap();
        store.create_schema().unwrap();
        store.create_schema().unwrap();
        assert_eq!(store.table_prefix(), "gen_");
        store.set_block_setting(1, "a", "b").unwrap();
        assert_eq!(store.block_setting(1, "a").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn rejects_unsafe_prefix() {
        let err = SqlSettingsStore::connect("sqlite::memory:", "wt; DROP").err().unwrap();
        assert!(matches!(err, SettingsError::InvalidPrefix(_)));
    }

    #[test]
    fn memory_store_counts() {
        let store = MemorySettingsStore::new();
        store.insert_module_setting("m", "k", "v").unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.module_settings("m").unwrap()["k"], "v");
        assert_eq!(store.reads(), 1);
    }
}
