//! Page store module
//!
//! Read-only lookup of CMS pages by their URL path. Handlers receive a
//! [`PageStore`] explicitly; the bundled implementation loads pages from
//! a TOML file at startup.

mod store;

pub use store::TomlPageStore;

use crate::error::HandlerError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A CMS page and its field data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: u64,
    pub name: String,
    /// Normalized path, `/` for the home page, `/a/b/` otherwise
    pub path: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_template() -> String {
    "basic-page".to_string()
}

impl Page {
    /// Field data with the fixed page keys, optionally restricted to `only`
    pub fn field_data(&self, only: Option<&[&str]>) -> Map<String, Value> {
        let mut out: Map<String, Value> = self
            .fields
            .iter()
            .filter(|(name, _)| only.map_or(true, |names| names.contains(&name.as_str())))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        out.insert("id".to_string(), Value::from(self.id));
        out.insert("name".to_string(), Value::from(self.name.clone()));
        out.insert("path".to_string(), Value::from(self.path.clone()));
        out.insert("template".to_string(), Value::from(self.template.clone()));
        out
    }
}

/// Lookup of pages by path
pub trait PageStore: Send + Sync {
    /// Find the page at `path`; the path is normalized before lookup
    fn get(&self, path: &str) -> Result<Option<Page>, HandlerError>;
}

/// Normalize a page path to `/` or `/a/b/`
pub fn normalize_path(path: &str) -> String {
    let inner: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if inner.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", inner.join("/"))
    }
}
