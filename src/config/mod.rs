#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::BlockSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_COURSES: usize = 10;

/// Block settings as stored in the `[block]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// `0` lists every course.
    pub default_max_courses: usize,
    pub force_default_max_courses: bool,
    pub highlight_prefix: Option<String>,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            default_max_courses: DEFAULT_MAX_COURSES,
            force_default_max_courses: false,
            highlight_prefix: None,
        }
    }
}

impl BlockSettings for BlockConfig {
    fn default_max_courses(&self) -> usize {
        self.default_max_courses
    }

    fn force_default_max_courses(&self) -> bool {
        self.force_default_max_courses
    }

    fn highlight_prefix(&self) -> Option<&str> {
        self.highlight_prefix.as_deref()
    }
}
