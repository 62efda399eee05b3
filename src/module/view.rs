// SPDX-License-Identifier: PMPL-1.0-or-later

//! Named HTML views with `{{ key }}` placeholders.
//!
//! Values are HTML-escaped when inserted, except `content`, which carries
//! an already rendered view into its layout.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

pub const DEFAULT_LAYOUT: &str = "layouts/default";
pub const HTTP_OK: u16 = 200;

/// Data handed to a view.
pub type ViewData = BTreeMap<String, String>;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern compiles")
});

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no view named {0:?}")]
    UnknownView(String),
    #[error("could not read views from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An HTML response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, String>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the default layout.
    pub fn with_default_layout() -> Self {
        let mut registry = Self::new();
        registry.register(
            DEFAULT_LAYOUT,
            "<!DOCTYPE html>\n<html>\n<head><title>{{ title }}</title></head>\n<body>\n{{ content }}\n</body>\n</html>\n",
        );
        registry
    }

    pub fn register(&mut self, name: &str, template: &str) {
        self.views.insert(name.to_string(), template.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Add every `*.html` file under `dir`. `dir/layouts/default.html`
    /// becomes the view `layouts/default`.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ViewError> {
        let load_error = |source: std::io::Error| ViewError::Load {
            path: dir.display().to_string(),
            source,
        };
        let mut loaded = 0;
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| load_error(e.into()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            let Ok(relative) = path.with_extension("").strip_prefix(dir).map(Path::to_path_buf) else {
                continue;
            };
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let template = fs::read_to_string(path).map_err(load_error)?;
            debug!(view = %name, "loaded view");
            self.views.insert(name, template);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Render the view `name` with `data`. Unknown placeholders render empty.
    pub fn render(&self, name: &str, data: &ViewData) -> Result<String, ViewError> {
        let template = self
            .views
            .get(name)
            .ok_or_else(|| ViewError::UnknownView(name.to_string()))?;
        let html = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            let value = data.get(key).map(String::as_str).unwrap_or_default();
            if key == "content" {
                value.to_string()
            } else {
                escape_html(value)
            }
        });
        Ok(html.into_owned())
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> ViewData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn escapes_values() {
        let mut views = ViewRegistry::new();
        views.register("hello", "<p>{{ name }} &amp; {{name}}</p>{{ missing }}");
        let html = views
            .render("hello", &data(&[("name", "<Tom & Jerry>")]))
            .unwrap();
        assert_eq!(
            html,
            "<p>&lt;Tom &amp; Jerry&gt; &amp; &lt;Tom &amp; Jerry&gt;</p>"
        );
    }

    #[test]
    fn content_is_raw() {
        let views = ViewRegistry::with_default_layout();
        let html = views
            .render(DEFAULT_LAYOUT, &data(&[("title", "A & B"), ("content", "<b>x</b>")]))
            .unwrap();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<b>x</b>"));
    }

    #[test]
    fn unknown_view() {
        let views = ViewRegistry::new();
        assert!(matches!(
            views.render("nope", &ViewData::new()),
            Err(ViewError::UnknownView(name)) if name == "nope"
        ));
    }

    #[test]
    fn loads_nested_views() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("layouts")).unwrap();
        fs::write(dir.path().join("layouts/default.html"), "[{{ content }}]").unwrap();
        fs::write(dir.path().join("faq.html"), "{{ question }}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut views = ViewRegistry::new();
        assert_eq!(views.load_dir(dir.path()).unwrap(), 2);
        assert!(views.contains("layouts/default"));
        assert!(views.contains("faq"));
        assert!(!views.contains("notes"));
    }
}
