//! Tooling & Integration Layer
//!
//! Command-line access to the tree builders over solution snapshots.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
