//! Project item entries: files and directories inside a project.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One file or directory inside a project.
///
/// `relative_path` is the virtual location shown in the tree and may differ
/// from the physical layout (linked files). `full_path` is the grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItemEntry {
    pub name: String,
    pub relative_path: String,
    pub full_path: PathBuf,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub is_link: bool,
    /// File name of the entry this one depends on, relative to this entry's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_upon: Option<String>,
}

impl ProjectItemEntry {
    pub fn file(relative_path: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        let relative_path = relative_path.into();
        let full_path = full_path.into();
        let name = file_name_of(&full_path, &relative_path);
        Self {
            name,
            relative_path,
            full_path,
            is_directory: false,
            is_link: false,
            dependent_upon: None,
        }
    }

    pub fn directory(relative_path: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            is_directory: true,
            ..Self::file(relative_path, full_path)
        }
    }

    pub fn with_dependent_upon(mut self, dependent_upon: impl Into<String>) -> Self {
        self.dependent_upon = Some(dependent_upon.into());
        self
    }

    pub fn as_link(mut self) -> Self {
        self.is_link = true;
        self
    }
}

fn file_name_of(full_path: &Path, relative_path: &str) -> String {
    full_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| {
            relative_path
                .rsplit(['/', '\\'])
                .find(|s| !s.is_empty())
                .unwrap_or(relative_path)
                .to_string()
        })
}
