//! Configuration for carve.
//!
//! Loaded from `.carve.toml` in the working directory; a missing file
//! yields defaults and an unreadable one is reported but not fatal.
//!
//! Example config:
//! ```toml
//! [ctags]
//! bin = "ctags-universal"   # override the indexer binary
//!
//! [ui]
//! max_rows = 20             # cap the selector list height
//! ```

use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = ".carve.toml";

/// External indexer configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CtagsConfig {
    /// Binary name or path to use instead of `ctags`.
    pub bin: Option<String>,
}

/// Interactive selector configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum rows the candidate list may occupy. None = full screen.
    pub max_rows: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CarveConfig {
    pub ctags: CtagsConfig,
    pub ui: UiConfig,
}

impl CarveConfig {
    /// Load config from `root/.carve.toml`, falling back to defaults.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CarveConfig::load(dir.path());
        assert!(config.ctags.bin.is_none());
        assert!(config.ui.max_rows.is_none());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[ctags]\nbin = \"uctags\"\n\n[ui]\nmax_rows = 12\n",
        )
        .unwrap();
        let config = CarveConfig::load(dir.path());
        assert_eq!(config.ctags.bin.as_deref(), Some("uctags"));
        assert_eq!(config.ui.max_rows, Some(12));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not [valid toml").unwrap();
        let config = CarveConfig::load(dir.path());
        assert!(config.ctags.bin.is_none());
    }
}
