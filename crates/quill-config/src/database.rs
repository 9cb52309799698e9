//! Task database location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> String {
    ".quill/quill.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL file path, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Directory that must exist before the database file can be created.
    #[must_use]
    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_lives_under_project_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".quill/quill.db");
        assert_eq!(config.parent_dir(), Some(PathBuf::from(".quill")));
    }

    #[test]
    fn memory_and_bare_files_have_no_parent() {
        let memory = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(memory.is_in_memory());
        assert_eq!(memory.parent_dir(), None);

        let bare = DatabaseConfig {
            path: "tasks.db".into(),
        };
        assert_eq!(bare.parent_dir(), None);
    }
}
