//! Entry Model
//!
//! Read-only snapshots of solution and project metadata. Rebuilt on every
//! refresh by the host; nothing here is mutated while children are listed.

mod entry;
mod package;
mod solution;

pub use entry::ProjectItemEntry;
pub use package::{PackageMetadata, PackageReference};
pub use solution::{Solution, SolutionFolder, SolutionItem, SolutionProject};
