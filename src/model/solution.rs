//! Solution, solution folder and solution project records.

use crate::types::SolutionFileMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub name: String,
    /// Absolute path of the solution file.
    pub full_path: PathBuf,
    /// Directory containing the solution file; solution files resolve against it.
    pub folder_path: PathBuf,
    /// Top-level folders (not nested in another folder).
    #[serde(default)]
    pub folders: Vec<SolutionFolder>,
    /// Top-level projects (not nested in a folder).
    #[serde(default)]
    pub projects: Vec<SolutionProject>,
    /// Loose files at solution level: display name -> path relative to `folder_path`.
    /// Carried for hosts; the root listing shows folders and projects only.
    #[serde(default, skip_serializing_if = "SolutionFileMap::is_empty")]
    pub solution_files: SolutionFileMap,
}

impl Solution {
    pub fn new(name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        let full_path = full_path.into();
        let folder_path = full_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            name: name.into(),
            full_path,
            folder_path,
            folders: Vec::new(),
            projects: Vec::new(),
            solution_files: SolutionFileMap::new(),
        }
    }

    pub fn folders(&self) -> &[SolutionFolder] {
        &self.folders
    }

    pub fn projects(&self) -> &[SolutionProject] {
        &self.projects
    }

    /// Find a project anywhere in the solution by name (case-insensitive).
    pub fn find_project(&self, name: &str) -> Option<&SolutionProject> {
        let wanted = name.to_lowercase();
        self.projects
            .iter()
            .find(|p| p.name.to_lowercase() == wanted)
            .or_else(|| self.folders.iter().find_map(|f| f.find_project(&wanted)))
    }
}

/// Virtual folder inside a solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionFolder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default)]
    pub folders: Vec<SolutionFolder>,
    #[serde(default)]
    pub projects: Vec<SolutionProject>,
    /// Display name -> path relative to the solution folder.
    #[serde(default)]
    pub solution_files: SolutionFileMap,
}

impl SolutionFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn folders(&self) -> &[SolutionFolder] {
        &self.folders
    }

    pub fn projects(&self) -> &[SolutionProject] {
        &self.projects
    }

    fn find_project(&self, lowered: &str) -> Option<&SolutionProject> {
        self.projects
            .iter()
            .find(|p| p.name.to_lowercase() == lowered)
            .or_else(|| self.folders.iter().find_map(|f| f.find_project(lowered)))
    }
}

/// Named pointer to a project file on disk. Holds no parsed content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionProject {
    pub name: String,
    /// Path as written in the solution file.
    #[serde(default)]
    pub relative_path: String,
    pub full_path: PathBuf,
}

impl SolutionProject {
    pub fn new(name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        let full_path = full_path.into();
        let relative_path = full_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name: name.into(),
            relative_path,
            full_path,
        }
    }

    /// Lower-cased project file extension, e.g. `csproj` or `fsproj`.
    pub fn extension(&self) -> String {
        self.full_path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

/// Child of a solution or solution folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolutionItem {
    Folder(SolutionFolder),
    Project(SolutionProject),
}

impl SolutionItem {
    pub fn name(&self) -> &str {
        match self {
            SolutionItem::Folder(folder) => &folder.name,
            SolutionItem::Project(project) => &project.name,
        }
    }
}
