//! CLI Tooling
//!
//! Command-line interface over solution snapshots: preview the explorer tree
//! and inspect package dependencies without a host UI.

use crate::config::{ConfigLoader, TreeConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::project::ProjectFactory;
use crate::snapshot::SolutionSnapshot;
use crate::tree::{self, render_text, resolve_package_dependencies};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// soltree - solution explorer tree preview
#[derive(Parser)]
#[command(name = "soltree")]
#[command(about = "Build a solution explorer tree from a parsed solution snapshot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold CLI logging flags over a configured base.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tree built from a snapshot
    Show {
        /// Snapshot file (.json or .toml)
        snapshot: PathBuf,
        /// How many levels below the solution to expand
        #[arg(long, default_value = "3")]
        depth: usize,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Nest files by name (Foo.Designer.cs under Foo.cs) regardless of config
        #[arg(long)]
        item_nesting: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List a project's packages with their direct dependencies
    Packages {
        /// Snapshot file (.json or .toml)
        snapshot: PathBuf,
        /// Project name (case-insensitive)
        project: String,
    },
    /// Print the effective configuration
    Config,
}

/// Execution context: workspace root plus loaded configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: TreeConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        let workspace_root = dunce::canonicalize(&workspace_root).unwrap_or(workspace_root);
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub async fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Show {
                snapshot,
                depth,
                format,
                item_nesting,
                no_color,
            } => {
                self.show(snapshot, *depth, format, *item_nesting, !*no_color)
                    .await
            }
            Commands::Packages { snapshot, project } => self.packages(snapshot, project).await,
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e))),
        }
    }

    async fn show(
        &self,
        snapshot_path: &Path,
        depth: usize,
        format: &str,
        item_nesting: bool,
        color: bool,
    ) -> Result<String, ApiError> {
        let (solution, factory) = SolutionSnapshot::load(snapshot_path)?.into_parts();
        let mut options = self.config.tree;
        options.item_nesting |= item_nesting;

        info!(
            solution = %solution.name,
            depth,
            item_nesting = options.item_nesting,
            "Building tree"
        );
        let root = tree::create_from_solution(
            Arc::new(factory),
            Arc::new(solution),
            self.workspace_root.clone(),
            options,
        );
        let rendered = tree::render::expand(&root, depth).await;

        match format {
            "json" => Ok(serde_json::to_string_pretty(&rendered)?),
            "text" => Ok(render_text(&rendered, color).trim_end().to_string()),
            other => Err(ApiError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    async fn packages(&self, snapshot_path: &Path, project_name: &str) -> Result<String, ApiError> {
        let (solution, factory) = SolutionSnapshot::load(snapshot_path)?.into_parts();
        let pointer = solution
            .find_project(project_name)
            .ok_or_else(|| ApiError::ProjectNotFound(project_name.to_string()))?;
        let project = factory
            .parse(pointer)
            .await?
            .ok_or_else(|| ApiError::ProjectNotFound(project_name.to_string()))?;

        let packages = project.package_references().await?;
        let dependency_map = project.package_dependencies().await?;
        let resolved = resolve_package_dependencies(&packages, &dependency_map);

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Package", "Version", "Dependencies"]);
        for entry in &resolved {
            let dependencies = entry
                .dependencies
                .iter()
                .map(|d| format!("{} {}", d.name, d.version))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                entry.package.name.clone(),
                entry.package.version.clone(),
                dependencies,
            ]);
        }
        Ok(format!("{}\n{} package(s)", table, resolved.len()))
    }
}
