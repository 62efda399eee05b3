// SPDX-License-Identifier: PMPL-1.0-or-later

//! `treeline.yaml`: where settings are stored and which defaults to use.
//!
//! Every field is optional. `TREELINE_DATABASE_URL` overrides the
//! database URL from the file; command-line flags override both.

use crate::locale::Lang;
use crate::module::{DEFAULT_LAYOUT, DEFAULT_TABLE_PREFIX};
use crate::surname::Tradition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE: &str = "treeline.yaml";
pub const DATABASE_URL_ENV: &str = "TREELINE_DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database_url: String,
    pub table_prefix: String,
    pub surname_tradition: Tradition,
    /// Language of console labels.
    pub language: Lang,
    pub layout: String,
    /// Directory of `*.html` views loaded over the built-in ones.
    pub views_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://treeline.db".to_string(),
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            surname_tradition: Tradition::default(),
            language: Lang::default(),
            layout: DEFAULT_LAYOUT.to_string(),
            views_dir: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }

    /// Load `path`, or `treeline.yaml` in the working directory when it
    /// exists, or the defaults. Then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE).is_file() => Self::from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        Ok(config.with_database_url_override(std::env::var(DATABASE_URL_ENV).ok()))
    }

    pub fn with_database_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            debug!(url = %url, "database url from environment");
            self.database_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.table_prefix, "wt_");
        assert_eq!(config.surname_tradition, Tradition::Paternal);
        assert_eq!(config.language, Lang::En);
        assert_eq!(config.layout, "layouts/default");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            "surname_tradition: polish\nlanguage: da\n",
            Path::new("treeline.yaml"),
        )
        .unwrap();
        assert_eq!(config.surname_tradition, Tradition::Polish);
        assert_eq!(config.language, Lang::Da);
        assert_eq!(config.table_prefix, "wt_");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_yaml("colour: red\n", Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("parsing x.yaml"));
    }

    #[test]
    fn environment_overrides_file() {
        let config = Config::default()
            .with_database_url_override(Some("sqlite::memory:".to_string()));
        assert_eq!(config.database_url, "sqlite::memory:");
        let unchanged = Config::default().with_database_url_override(Some("  ".to_string()));
        assert_eq!(unchanged.database_url, "sqlite://treeline.db");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("none.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
