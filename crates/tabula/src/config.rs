//! # Configuration
//!
//! Defaults a caller can rely on when a view leaves something open, managed by
//! [`confique`] for layered loading from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TABULA_PER_PAGE`.
//! 2. **Project Config**: `./tabula.toml`.
//! 3. **Global Config**: `tabula.toml` in the OS config directory (the CLI
//!    resolves it via the `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `per_page` | `20` | Page size for a requested page with no size |
//! | `sort_direction` | `desc` | Direction for a sort with no direction |

use crate::dataview::SortDirection;
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "tabula.toml";

const DEFAULT_PER_PAGE: usize = 20;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TabulaConfig {
    /// Page size used when a page is requested without one.
    #[config(default = 20, env = "TABULA_PER_PAGE")]
    pub per_page: usize,

    /// Sort direction used when a sort names no direction.
    /// When absent, defaults to "desc".
    pub sort_direction: Option<SortDirection>,
}

impl Default for TabulaConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            sort_direction: None,
        }
    }
}

impl TabulaConfig {
    /// Loads configuration from the environment and the given files.
    ///
    /// Files are listed highest priority first; missing files are skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = TabulaConfig::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    /// Get the sort direction, using the default if not configured.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = TabulaConfig::default();
        assert_eq!(config.per_page, 20);
        assert_eq!(config.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_sort_direction_custom() {
        let config = TabulaConfig {
            sort_direction: Some(SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(config.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn test_load_missing_files_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = TabulaConfig::load(&[temp.path().join(CONFIG_FILE_NAME)]).unwrap();
        assert_eq!(config.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_load_earlier_file_wins() {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("project.toml");
        let global = temp.path().join("global.toml");
        fs::write(&project, "sort_direction = \"asc\"\n").unwrap();
        fs::write(&global, "per_page = 7\nsort_direction = \"desc\"\n").unwrap();

        let config = TabulaConfig::load(&[&project, &global]).unwrap();
        assert_eq!(config.per_page, 7);
        assert_eq!(config.sort_direction(), SortDirection::Asc);
    }
}
