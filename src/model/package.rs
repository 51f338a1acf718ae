//! Package references and resolved package metadata.

use crate::types::PackageVersionMap;
use serde::{Deserialize, Serialize};

/// A package a project references, with its direct dependencies when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
    /// Direct dependencies as declared by the package's own manifest.
    #[serde(default, skip_serializing_if = "PackageVersionMap::is_empty")]
    pub dependencies: PackageVersionMap,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: PackageVersionMap::new(),
        }
    }
}

/// Metadata for one package in a project's transitive package map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<PackageVersionMap>,
}

impl PackageMetadata {
    pub fn with_dependencies<I, K, V>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            dependencies: Some(
                dependencies
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}
