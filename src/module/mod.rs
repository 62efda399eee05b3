// SPDX-License-Identifier: PMPL-1.0-or-later

//! Module base: settings, access levels and views shared by every module.
//!
//! A module is installed in a directory whose last component is its name.
//! Its settings live in a [`SettingsStore`]; they are loaded in one go on
//! first use and served from a cache afterwards.

pub mod census_assistant;
pub mod store;
pub mod view;

pub use census_assistant::CensusAssistantModule;
pub use store::{MemorySettingsStore, SettingsError, SettingsStore, SqlSettingsStore, DEFAULT_TABLE_PREFIX};
pub use view::{escape_html, Response, ViewData, ViewError, ViewRegistry, DEFAULT_LAYOUT, HTTP_OK};

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

/// Who may see a module component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Nobody, not even administrators.
    Hide,
    /// Managers and administrators.
    None,
    /// Members.
    User,
    /// Visitors.
    #[default]
    Private,
}

impl AccessLevel {
    pub fn value(&self) -> i64 {
        match self {
            AccessLevel::Hide => -1,
            AccessLevel::None => 0,
            AccessLevel::User => 1,
            AccessLevel::Private => 2,
        }
    }

    pub fn from_value(value: i64) -> Result<Self, SettingsError> {
        match value {
            -1 => Ok(AccessLevel::Hide),
            0 => Ok(AccessLevel::None),
            1 => Ok(AccessLevel::User),
            2 => Ok(AccessLevel::Private),
            other => Err(SettingsError::UnknownAccessLevel(other)),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessLevel::Hide => "hide",
            AccessLevel::None => "none",
            AccessLevel::User => "user",
            AccessLevel::Private => "private",
        };
        f.write_str(label)
    }
}

/// State every module carries: where it is installed, its settings store
/// and cache, and its layout.
pub struct ModuleBase {
    directory: PathBuf,
    name: String,
    store: Rc<dyn SettingsStore>,
    settings: RefCell<Option<BTreeMap<String, String>>>,
    layout: String,
}

impl ModuleBase {
    pub fn new(directory: impl AsRef<Path>, store: Rc<dyn SettingsStore>) -> Self {
        let directory = directory.as_ref().to_path_buf();
        let name = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            directory,
            name,
            store,
            settings: RefCell::new(None),
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }

    /// Use a different layout for [`Module::view_response`].
    pub fn with_layout(mut self, layout: &str) -> Self {
        self.layout = layout.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn get_block_setting(&self, block_id: i64, name: &str, default: &str) -> Result<String, SettingsError> {
        Ok(self
            .store
            .block_setting(block_id, name)?
            .unwrap_or_else(|| default.to_string()))
    }

    pub fn set_block_setting(&self, block_id: i64, name: &str, value: &str) -> Result<(), SettingsError> {
        self.store.set_block_setting(block_id, name, value)
    }

    fn load_settings(&self) -> Result<(), SettingsError> {
        if self.settings.borrow().is_none() {
            let settings = self.store.module_settings(&self.name)?;
            debug!(module = %self.name, count = settings.len(), "loaded module settings");
            *self.settings.borrow_mut() = Some(settings);
        }
        Ok(())
    }

    pub fn get_preference(&self, name: &str, default: &str) -> Result<String, SettingsError> {
        self.load_settings()?;
        let settings = self.settings.borrow();
        Ok(settings
            .as_ref()
            .and_then(|s| s.get(name))
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    /// Store a module setting. Nothing is written when the value is
    /// unchanged.
    pub fn set_preference(&self, name: &str, value: &str) -> Result<(), SettingsError> {
        self.load_settings()?;
        let current = self.settings.borrow().as_ref().and_then(|s| s.get(name).cloned());
        match current {
            None => self.store.insert_module_setting(&self.name, name, value)?,
            Some(old) if old != value => self.store.update_module_setting(&self.name, name, value)?,
            Some(_) => return Ok(()),
        }
        debug!(module = %self.name, setting = name, "module setting saved");
        if let Some(settings) = self.settings.borrow_mut().as_mut() {
            settings.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    /// The stored level for `component` in a tree, or `default`.
    pub fn access_level(&self, tree_id: i64, component: &str, default: AccessLevel) -> Result<AccessLevel, SettingsError> {
        match self.store.access_level(tree_id, &self.name, component)? {
            Some(value) => AccessLevel::from_value(value),
            None => Ok(default),
        }
    }

    pub fn set_access_level(&self, tree_id: i64, component: &str, level: AccessLevel) -> Result<(), SettingsError> {
        self.store
            .set_access_level(tree_id, &self.name, component, level.value())
    }
}

/// A module. Implementors supply their base, title and description.
pub trait Module {
    fn base(&self) -> &ModuleBase;

    /// Label for tabs and menus.
    fn title(&self) -> String;

    /// One sentence describing the module.
    fn description(&self) -> String;

    fn default_access_level(&self) -> AccessLevel {
        AccessLevel::Private
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn get_access_level(&self, tree_id: i64, component: &str) -> Result<AccessLevel, SettingsError> {
        self.base()
            .access_level(tree_id, component, self.default_access_level())
    }

    /// Render `view` with `data`, then wrap it in the module layout. The
    /// layout sees the same data plus the rendered view as `content`.
    fn view_response(
        &self,
        views: &ViewRegistry,
        view: &str,
        data: &ViewData,
        status: u16,
    ) -> Result<Response, ViewError> {
        let mut layout_data = data.clone();
        layout_data.insert("content".to_string(), views.render(view, data)?);
        let body = views.render(self.base().layout(), &layout_data)?;
        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestModule {
        base: ModuleBase,
    }

    impl Module for TestModule {
        fn base(&self) -> &ModuleBase {
            &self.base
        }

        fn title(&self) -> String {
            "Test".to_string()
        }

        fn description(&self) -> String {
            "A module for tests.".to_string()
        }

        fn default_access_level(&self) -> AccessLevel {
            AccessLevel::User
        }
    }

    fn module(store: Rc<MemorySettingsStore>) -> TestModule {
        TestModule {
            base: ModuleBase::new("/srv/modules_v3/faq", store),
        }
    }

    #[test]
    fn name_is_directory_basename() {
        let m = module(Rc::new(MemorySettingsStore::new()));
        assert_eq!(m.name(), "faq");
        assert_eq!(m.base().directory(), Path::new("/srv/modules_v3/faq"));
    }

    #[test]
    fn preferences_cached_and_written_once() {
        let store = Rc::new(MemorySettingsStore::new());
        let m = module(store.clone());

        assert_eq!(m.base().get_preference("colour", "red").unwrap(), "red");
        m.base().set_preference("colour", "blue").unwrap();
        m.base().set_preference("colour", "blue").unwrap();
        assert_eq!(store.writes(), 1);
        m.base().set_preference("colour", "green").unwrap();
        assert_eq!(store.writes(), 2);
        assert_eq!(m.base().get_preference("colour", "red").unwrap(), "green");
        assert_eq!(store.reads(), 1);

        // A fresh module instance reads back what was stored.
        let again = module(store.clone());
        assert_eq!(again.base().get_preference("colour", "").unwrap(), "green");
    }

    #[test]
    fn block_settings_default() {
        let m = module(Rc::new(MemorySettingsStore::new()));
        assert_eq!(m.base().get_block_setting(3, "days", "7").unwrap(), "7");
        m.base().set_block_setting(3, "days", "30").unwrap();
        assert_eq!(m.base().get_block_setting(3, "days", "7").unwrap(), "30");
    }

    #[test]
    fn access_levels() {
        let m = module(Rc::new(MemorySettingsStore::new()));
        assert_eq!(m.get_access_level(1, "menu").unwrap(), AccessLevel::User);
        m.base().set_access_level(1, "menu", AccessLevel::Hide).unwrap();
        assert_eq!(m.get_access_level(1, "menu").unwrap(), AccessLevel::Hide);
        assert_eq!(m.get_access_level(2, "menu").unwrap(), AccessLevel::User);
        assert_eq!(AccessLevel::default(), AccessLevel::Private);
        assert!(AccessLevel::from_value(5).is_err());
    }

    #[test]
    fn view_response_wraps_layout() {
        let m = module(Rc::new(MemorySettingsStore::new()));
        let mut views = ViewRegistry::with_default_layout();
        views.register("faq/page", "<h1>{{ title }}</h1>");
        let data: ViewData = [("title".to_string(), "Q & A".to_string())].into();

        let response = m.view_response(&views, "faq/page", &data, HTTP_OK).unwrap();
        assert_eq!(response.status, 200);
        assert!(response.body.contains("<title>Q &amp; A</title>"));
        assert!(response.body.contains("<h1>Q &amp; A</h1>"));
    }

    #[test]
    fn custom_layout() {
        let store: Rc<dyn SettingsStore> = Rc::new(MemorySettingsStore::new());
        let m = TestModule {
            base: ModuleBase::new("faq", store).with_layout("layouts/bare"),
        };
        let mut views = ViewRegistry::new();
        views.register("layouts/bare", "[{{ content }}]");
        views.register("page", "<i>{{ x }}</i>");
        let data: ViewData = [("x".to_string(), "1".to_string())].into();
        let response = m.view_response(&views, "page", &data, 404).unwrap();
        assert_eq!(response, Response { status: 404, body: "[<i>1</i>]".to_string() });
    }
}
