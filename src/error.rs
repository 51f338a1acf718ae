//! Error types for the solution tree core.

use thiserror::Error;

/// Errors surfaced by collaborators, loaders, and configuration.
///
/// Builder operations treat collaborator failures as local outcomes: a failed
/// project parse becomes an unknown-project node and a failed package lookup
/// becomes an empty dependency list. These variants only escape through the
/// loading and configuration paths.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to parse project {path}: {message}")]
    ProjectParse { path: String, message: String },

    #[error("Failed to read package metadata for {project}: {message}")]
    PackageMetadata { project: String, message: String },

    #[error("Failed to read project entries for {project}: {message}")]
    ProjectEntries { project: String, message: String },

    #[error("Invalid snapshot: {0}")]
    Snapshot(String),

    #[error("Project not found in solution: {0}")]
    ProjectNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
