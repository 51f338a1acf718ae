//! Solution snapshots
//!
//! A serialized, already-parsed solution graph: the solution hierarchy plus the
//! parsed content of each project. Hosts that parse eagerly (and the `soltree`
//! binary) feed a snapshot to [`SnapshotProjectFactory`].

use crate::error::ApiError;
use crate::model::{Solution, SolutionProject};
use crate::project::{InMemoryProject, Project, ProjectFactory, ProjectKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Parsed content of one project file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub full_path: PathBuf,
    /// Raw `type` discriminant as produced by the parser.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    /// Parser failure message; the project then resolves to an unknown node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub content: InMemoryProject,
}

/// Serialized solution graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    pub solution: Solution,
    #[serde(default)]
    pub projects: Vec<ProjectSnapshot>,
}

impl SolutionSnapshot {
    /// Load from a `.json` or `.toml` file, chosen by extension (JSON otherwise).
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Snapshot(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let is_toml = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let snapshot = if is_toml {
            Self::from_toml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        debug!(
            path = %path.display(),
            projects = snapshot.projects.len(),
            "Loaded solution snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ApiError> {
        serde_json::from_str(text)
            .map_err(|e| ApiError::Snapshot(format!("Invalid JSON snapshot: {}", e)))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ApiError> {
        toml::from_str(text)
            .map_err(|e| ApiError::Snapshot(format!("Invalid TOML snapshot: {}", e)))
    }

    /// Split into the solution and a factory serving the parsed projects.
    pub fn into_parts(self) -> (Solution, SnapshotProjectFactory) {
        let factory = SnapshotProjectFactory::new(self.projects);
        (self.solution, factory)
    }
}

struct ParsedEntry {
    kind: ProjectKind,
    error: Option<String>,
    source: Arc<InMemoryProject>,
}

/// [`ProjectFactory`] backed by snapshot content, keyed by project file path.
pub struct SnapshotProjectFactory {
    projects: HashMap<PathBuf, ParsedEntry>,
}

impl SnapshotProjectFactory {
    pub fn new(projects: Vec<ProjectSnapshot>) -> Self {
        let projects = projects
            .into_iter()
            .map(|p| {
                let entry = ParsedEntry {
                    kind: ProjectKind::from_discriminant(p.project_type.as_deref()),
                    error: p.error,
                    source: Arc::new(p.content),
                };
                (p.full_path, entry)
            })
            .collect();
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[async_trait]
impl ProjectFactory for SnapshotProjectFactory {
    async fn parse(&self, project: &SolutionProject) -> Result<Option<Project>, ApiError> {
        let Some(parsed) = self.projects.get(&project.full_path) else {
            return Ok(None);
        };
        if let Some(message) = &parsed.error {
            return Err(ApiError::ProjectParse {
                path: project.full_path.display().to_string(),
                message: message.clone(),
            });
        }
        Ok(Some(Project::new(
            project.name.clone(),
            project.full_path.clone(),
            parsed.kind,
            parsed.source.clone(),
        )))
    }
}
