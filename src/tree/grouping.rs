//! Dependency Grouper
//!
//! Collapses chains of dependent files in one virtual folder into groups: a
//! root file shown at top level plus the related files nested beneath it.
//! Pure and synchronous; all bookkeeping lives for one call only.

use crate::model::ProjectItemEntry;
use crate::paths::resolve_sibling;
use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// A top-level file and the files nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    pub root: &'a ProjectItemEntry,
    /// Ancestors reached through dependent-upon links first, in chain order,
    /// then files depending on any group member, breadth-first.
    pub related: Vec<&'a ProjectItemEntry>,
}

/// Partition `files` into groups.
///
/// Files are visited in the given order. The first file of a connected chain
/// becomes the group root; every other file of that chain is related to it.
/// Each input file lands in exactly one group, either as root or as related.
/// References that resolve to no file in `files` end the chain silently.
///
/// With `item_nesting`, a file lacking a dependent-upon reference is linked to
/// the sibling whose stem prefixes its name (`Foo.cs` <- `Foo.Designer.cs`).
pub fn group_dependent_files<'a>(
    files: &[&'a ProjectItemEntry],
    item_nesting: bool,
) -> Vec<FileGroup<'a>> {
    let mut by_path: HashMap<&Path, usize> = HashMap::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        by_path.entry(file.full_path.as_path()).or_insert(index);
    }

    let parents: Vec<Option<usize>> = (0..files.len())
        .map(|index| parent_of(files, index, &by_path, item_nesting))
        .collect();

    let mut dependants: Vec<Vec<usize>> = vec![Vec::new(); files.len()];
    for (index, parent) in parents.iter().enumerate() {
        if let Some(parent) = *parent {
            dependants[parent].push(index);
        }
    }

    let mut processed = vec![false; files.len()];
    let mut groups = Vec::new();

    for root in 0..files.len() {
        if processed[root] {
            continue;
        }
        processed[root] = true;
        let mut members = vec![root];

        // `processed` doubles as the visited set for this walk: every hop marks
        // its target, so a cycle stops at the first repeated file.
        let mut current = root;
        while let Some(parent) = parents[current] {
            if processed[parent] {
                trace!(
                    file = %files[current].full_path.display(),
                    "Dependent-upon chain revisits a file; stopping walk"
                );
                break;
            }
            processed[parent] = true;
            members.push(parent);
            current = parent;
        }

        let mut cursor = 0;
        while cursor < members.len() {
            for &dependant in &dependants[members[cursor]] {
                if !processed[dependant] {
                    processed[dependant] = true;
                    members.push(dependant);
                }
            }
            cursor += 1;
        }

        groups.push(FileGroup {
            root: files[root],
            related: members[1..].iter().map(|&m| files[m]).collect(),
        });
    }

    groups
}

/// Index of the file `files[index]` nests under, if any.
fn parent_of(
    files: &[&ProjectItemEntry],
    index: usize,
    by_path: &HashMap<&Path, usize>,
    item_nesting: bool,
) -> Option<usize> {
    let file = files[index];
    match &file.dependent_upon {
        Some(reference) => {
            let target = resolve_sibling(&file.full_path, reference);
            by_path
                .get(target.as_path())
                .copied()
                .filter(|&parent| parent != index)
        }
        None if item_nesting => nesting_parent(files, index),
        None => None,
    }
}

/// Longest sibling name `M` such that this file is named `stem(M).<anything><ext(M)>`.
fn nesting_parent(files: &[&ProjectItemEntry], index: usize) -> Option<usize> {
    let name = files[index].name.as_str();
    let (_, extension) = split_extension(name);
    files
        .iter()
        .enumerate()
        .filter(|(candidate, _)| *candidate != index)
        .filter_map(|(candidate, file)| {
            let other = file.name.as_str();
            let (stem, other_extension) = split_extension(other);
            let nests = other != name
                && other_extension == extension
                && name.len() > other.len()
                && name.starts_with(stem)
                && name[stem.len()..].starts_with('.');
            nests.then_some((candidate, other.len()))
        })
        .max_by_key(|&(candidate, len)| (len, std::cmp::Reverse(candidate)))
        .map(|(candidate, _)| candidate)
}

/// `"foo.designer.cs"` -> `("foo.designer", ".cs")`; dotfiles have no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}
