//! Configuration
//!
//! Layered configuration for tree building and logging. Sources are merged by
//! [`MergeService`](merge::service::MergeService); callers go through [`ConfigLoader`].

mod facade;
pub mod merge;
pub mod sources;
pub mod xdg;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Tree-building options carried by every [`TreeItemContext`](crate::tree::TreeItemContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    /// Nest `Foo.*.cs` under `Foo.cs` even without a dependent-upon reference.
    #[serde(default)]
    pub item_nesting: bool,

    /// Show a dependencies node under projects that reference packages.
    #[serde(default = "default_true")]
    pub show_packages: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            item_nesting: false,
            show_packages: default_true(),
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub tree: TreeOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TreeConfig {
    /// Reject values the logging layer would fail on later.
    pub fn validate(&self) -> Result<(), ApiError> {
        const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
        const FORMATS: [&str; 2] = ["text", "json"];
        const OUTPUTS: [&str; 5] = ["stdout", "stderr", "file", "file+stderr", "both"];

        let logging = &self.logging;
        if !LEVELS.contains(&logging.level.as_str()) {
            return Err(ApiError::ConfigError(format!(
                "Invalid log level: {} (must be one of {})",
                logging.level,
                LEVELS.join(", ")
            )));
        }
        if !FORMATS.contains(&logging.format.as_str()) {
            return Err(ApiError::ConfigError(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                logging.format
            )));
        }
        if !OUTPUTS.contains(&logging.output.as_str()) {
            return Err(ApiError::ConfigError(format!(
                "Invalid log output: {}",
                logging.output
            )));
        }
        for (module, level) in &logging.modules {
            if !LEVELS.contains(&level.as_str()) {
                return Err(ApiError::ConfigError(format!(
                    "Invalid log level for module {}: {}",
                    module, level
                )));
            }
        }
        Ok(())
    }
}
