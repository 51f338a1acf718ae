//! Package Dependency Resolver
//!
//! Pairs each declared package with its direct dependencies taken from the
//! project's transitive package map. One level only; deeper levels resolve when
//! the host expands a dependency node.

use crate::model::{PackageMetadata, PackageReference};
use crate::types::PackageDependencyMap;

/// A declared package and its direct dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub package: PackageReference,
    pub dependencies: Vec<PackageReference>,
}

/// Find a package's metadata by case-insensitive name. First match in map order wins.
pub fn find_package<'a>(
    dependency_map: &'a PackageDependencyMap,
    name: &str,
) -> Option<&'a PackageMetadata> {
    let wanted = name.to_lowercase();
    dependency_map
        .iter()
        .find(|(key, _)| key.to_lowercase() == wanted)
        .map(|(_, metadata)| metadata)
}

/// Direct dependencies of `name`, in the map's declaration order.
pub fn direct_dependencies(
    dependency_map: &PackageDependencyMap,
    name: &str,
) -> Vec<PackageReference> {
    find_package(dependency_map, name)
        .and_then(|metadata| metadata.dependencies.as_ref())
        .map(|dependencies| {
            dependencies
                .iter()
                .map(|(name, version)| PackageReference::new(name.clone(), version.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Resolve every declared package, preserving declaration order.
pub fn resolve_package_dependencies(
    packages: &[PackageReference],
    dependency_map: &PackageDependencyMap,
) -> Vec<ResolvedPackage> {
    packages
        .iter()
        .map(|package| ResolvedPackage {
            package: package.clone(),
            dependencies: direct_dependencies(dependency_map, &package.name),
        })
        .collect()
}
