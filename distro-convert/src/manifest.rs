//! Old-format and versioned manifest types
//!
//! Source manifests are the flat `releases/<dist>.yaml` documents. The
//! versioned ones add `type`, `version`, platforms and tag templates.

use std::collections::BTreeMap;

use distro_manifest::scalar::{optional_scalar, scalar};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Distribution name to supported platforms
pub type Targets = IndexMap<String, Vec<String>>;

/// Notice shown to clients that still read `gbp-repos`
pub const LEGACY_NOTICE: &str = "You must update to a newer rosdep version by calling..sudo apt-get update && sudo apt-get install python-rosdep (make sure to uninstall the pip version on Ubuntu";

pub const FORMAT_VERSION: u32 = 1;

/// Parse `targets.yaml`, a sequence of single-entry mappings
pub fn parse_targets(content: &str) -> Result<Targets> {
    let entries: Vec<IndexMap<String, Vec<String>>> = serde_yaml::from_str(content)?;
    Ok(entries.into_iter().flatten().collect())
}

/// Old-format manifest
#[derive(Debug, Clone, Deserialize)]
pub struct SourceManifest {
    pub repositories: BTreeMap<String, SourceRepository>,
}

impl SourceManifest {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Old-format repository entry
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRepository {
    /// Only present in `-devel` manifests
    #[serde(rename = "type", default, deserialize_with = "optional_scalar")]
    pub vcs_type: Option<String>,

    #[serde(deserialize_with = "scalar")]
    pub url: String,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub version: Option<String>,

    /// Package name to optional subfolder, in source order
    #[serde(default)]
    pub packages: Option<IndexMap<String, Option<String>>>,
}

impl SourceRepository {
    /// `true` when the only package is the repository itself at its root
    pub fn has_implicit_package(&self, repo_name: &str) -> bool {
        match &self.packages {
            Some(packages) if packages.len() == 1 => {
                matches!(packages.get(repo_name), Some(None))
            }
            _ => false,
        }
    }

    /// Package used when probing tags: the last declared one, else the repository
    pub fn probe_package<'a>(&'a self, repo_name: &'a str) -> &'a str {
        self.packages
            .as_ref()
            .and_then(|packages| packages.keys().last())
            .map(String::as_str)
            .unwrap_or(repo_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestType {
    Release,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub subfolder: String,
}

/// Package map of a versioned manifest; `None` is a bare marker
pub type Packages = IndexMap<String, Option<PackageEntry>>;

pub fn convert_packages(packages: &IndexMap<String, Option<String>>) -> Packages {
    packages
        .iter()
        .map(|(name, subfolder)| {
            let entry = subfolder.as_ref().map(|subfolder| PackageEntry {
                subfolder: subfolder.clone(),
            });
            (name.clone(), entry)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseTags {
    pub release: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Packages>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<ReleaseTags>,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Versioned release manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseManifest {
    #[serde(rename = "gbp-repos")]
    pub gbp_repos: IndexMap<String, ()>,

    pub platforms: Vec<String>,

    pub repositories: BTreeMap<String, ReleaseRepository>,

    #[serde(rename = "type")]
    pub manifest_type: ManifestType,

    pub version: u32,
}

impl ReleaseManifest {
    pub fn new(platforms: Vec<String>) -> Self {
        Self {
            gbp_repos: IndexMap::from([(LEGACY_NOTICE.to_string(), ())]),
            platforms,
            repositories: BTreeMap::new(),
            manifest_type: ManifestType::Release,
            version: FORMAT_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Packages>,

    #[serde(rename = "type")]
    pub vcs_type: String,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Versioned test (`-devel`) manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestManifest {
    pub repositories: BTreeMap<String, TestRepository>,

    #[serde(rename = "type")]
    pub manifest_type: ManifestType,

    pub version: u32,
}

impl TestManifest {
    pub fn new() -> Self {
        Self {
            repositories: BTreeMap::new(),
            manifest_type: ManifestType::Test,
            version: FORMAT_VERSION,
        }
    }
}

impl Default for TestManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Block-style YAML; optional keys that are unset are not emitted
pub fn to_yaml<T: Serialize>(manifest: &T) -> Result<String> {
    Ok(serde_yaml::to_string(manifest)?)
}
