//! Versioned release manifests
//!
//! Loads a `type: release`, `version: 1` manifest into repository records.
//! The converter uses this to reuse tag templates from its previous output.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Repository, RepositoryData, Result};

#[derive(Debug, Deserialize)]
struct ReleaseFileData {
    #[serde(rename = "type", default)]
    file_type: Option<String>,

    #[serde(default)]
    version: Option<u64>,

    #[serde(default)]
    platforms: Vec<String>,

    #[serde(default)]
    repositories: BTreeMap<String, RepositoryData>,
}

/// Release manifest of a single distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFile {
    pub name: String,
    pub platforms: Vec<String>,
    pub repositories: BTreeMap<String, Repository>,
}

impl ReleaseFile {
    pub const FILE_TYPE: &'static str = "release";
    pub const FORMAT_VERSION: u64 = 1;

    /// Parse a release manifest from YAML content
    pub fn from_yaml(name: &str, content: &str) -> Result<Self> {
        let data: ReleaseFileData = serde_yaml::from_str(content)?;

        if data.file_type.as_deref() != Some(Self::FILE_TYPE) {
            return Err(Error::Format {
                name: name.to_string(),
                reason: format!(
                    "expected type '{}', found {:?}",
                    Self::FILE_TYPE,
                    data.file_type
                ),
            });
        }
        if data.version != Some(Self::FORMAT_VERSION) {
            return Err(Error::Format {
                name: name.to_string(),
                reason: format!(
                    "expected version {}, found {:?}",
                    Self::FORMAT_VERSION,
                    data.version
                ),
            });
        }

        let repositories = data
            .repositories
            .into_iter()
            .map(|(repo_name, repo_data)| {
                Repository::new(repo_name.clone(), repo_data).map(|repo| (repo_name, repo))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        debug!("Loaded {} repositories for {}", repositories.len(), name);

        Ok(Self {
            name: name.to_string(),
            platforms: data.platforms,
            repositories,
        })
    }

    /// Parse a release manifest from a file path
    pub fn from_file(name: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(name, &content)
    }

    pub fn repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.get(name)
    }
}
