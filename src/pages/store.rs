// TOML-backed page store
// Loads `[[page]]` tables once and serves lookups from memory

use super::{normalize_path, Page, PageStore};
use crate::error::HandlerError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PageFile {
    #[serde(default)]
    page: Vec<Page>,
}

/// In-memory page store loaded from a TOML file
#[derive(Debug, Default)]
pub struct TomlPageStore {
    pages: HashMap<String, Page>,
}

impl TomlPageStore {
    /// Parse pages from TOML text
    ///
    /// Page paths are normalized; two pages resolving to the same path is an error.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let file: PageFile =
            toml::from_str(content).map_err(|e| format!("Invalid page file: {e}"))?;

        let mut pages: HashMap<String, Page> = HashMap::with_capacity(file.page.len());
        for mut page in file.page {
            page.path = normalize_path(&page.path);
            if let Some(existing) = pages.get(&page.path) {
                return Err(format!(
                    "Duplicate page path '{}' (ids {} and {})",
                    page.path, existing.id, page.id
                ));
            }
            pages.insert(page.path.clone(), page);
        }

        Ok(Self { pages })
    }

    /// Load pages from a TOML file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read page file {}: {e}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageStore for TomlPageStore {
    fn get(&self, path: &str) -> Result<Option<Page>, HandlerError> {
        Ok(self.pages.get(&normalize_path(path)).cloned())
    }
}
