//! Database location configuration.

use serde::{Deserialize, Serialize};

/// Default database path relative to the project root.
fn default_path() -> String {
    String::from(".mrp/mrp.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` is accepted for tests.
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
    /// Whether the database lives purely in memory (nothing on disk).
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_project_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".mrp/mrp.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_detection() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_in_memory());
    }
}
