//! Repository records
//!
//! A [`Repository`] is one entry of the `repositories` mapping in a
//! versioned release manifest. [`RepositoryData`] is the raw serde form
//! of that entry; [`Repository::new`] validates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::scalar::{optional_scalar, optional_scalar_map, scalar};
use crate::{Error, Result, Status};

pub const DEFAULT_VCS_TYPE: &str = "git";

/// Raw repository entry as it appears in a manifest
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RepositoryData {
    /// Version control kind, `git` when absent
    #[serde(
        rename = "type",
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub vcs_type: Option<String>,

    #[serde(deserialize_with = "scalar")]
    pub url: String,

    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// Tag kind to tag template
    #[serde(
        default,
        deserialize_with = "optional_scalar_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<IndexMap<String, String>>,

    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    #[serde(
        default,
        deserialize_with = "optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_description: Option<String>,

    /// Only the keys are used; values may be markers or subfolder mappings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<IndexMap<String, serde_yaml::Value>>,
}

/// Validated repository record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub vcs_type: String,
    pub url: String,
    pub version: Option<String>,
    pub tags: IndexMap<String, String>,
    pub status: Option<Status>,
    pub status_description: Option<String>,
    /// Sorted package names
    pub package_names: Vec<String>,
}

impl Repository {
    /// Build a record from a decoded manifest entry.
    ///
    /// Fails when a version is declared without tags, when tags lack a
    /// `release` entry, or when the status is not a known one.
    pub fn new(name: impl Into<String>, data: RepositoryData) -> Result<Self> {
        let name = name.into();

        if data.version.is_some() && data.tags.is_none() {
            return Err(Error::MissingTags(name));
        }

        let tags = match data.tags {
            Some(tags) if !tags.contains_key("release") => {
                return Err(Error::MissingReleaseTag(name));
            }
            Some(tags) => tags,
            None => IndexMap::new(),
        };

        let status = match data.status {
            Some(status) => Some(status.parse::<Status>().map_err(|status| {
                Error::InvalidStatus {
                    repository: name.clone(),
                    status,
                }
            })?),
            None => None,
        };

        let mut package_names: Vec<String> = data
            .packages
            .map(|packages| packages.into_keys().collect())
            .unwrap_or_default();
        package_names.sort();

        Ok(Self {
            name,
            vcs_type: data
                .vcs_type
                .unwrap_or_else(|| DEFAULT_VCS_TYPE.to_string()),
            url: data.url,
            version: data.version,
            tags,
            status,
            status_description: data.status_description,
            package_names,
        })
    }

    /// Parse a single repository entry from YAML content
    pub fn from_yaml(name: impl Into<String>, content: &str) -> Result<Self> {
        let data: RepositoryData = serde_yaml::from_str(content)?;
        Self::new(name, data)
    }

    /// Project the record back to its minimal serializable form.
    ///
    /// Tags are only emitted together with a version.
    pub fn get_data(&self) -> RepositoryData {
        let tags = match &self.version {
            Some(_) if !self.tags.is_empty() => Some(self.tags.clone()),
            _ => None,
        };

        RepositoryData {
            vcs_type: (self.vcs_type != DEFAULT_VCS_TYPE).then(|| self.vcs_type.clone()),
            url: self.url.clone(),
            version: self.version.clone(),
            tags,
            status: self.status.map(|s| s.to_string()),
            status_description: self.status_description.clone(),
            packages: None,
        }
    }

    /// Recorded release tag template, if any
    pub fn release_tag(&self) -> Option<&str> {
        self.tags.get("release").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_repository() {
        let repo = Repository::from_yaml("roscpp", "url: https://github.com/ros/roscpp.git\n").unwrap();
        assert_eq!(repo.name, "roscpp");
        assert_eq!(repo.vcs_type, "git");
        assert_eq!(repo.version, None);
        assert!(repo.tags.is_empty());
        assert!(repo.package_names.is_empty());
    }

    #[test]
    fn test_parse_full_repository() {
        let yaml = r#"
type: hg
url: https://github.com/ros/geometry.git
version: 1.9.21-0
tags:
  release: "release/groovy/{package}/{version}"
status: maintained
status_description: Bugfixes only
packages:
  tf:
  angles:
    subfolder: angles
"#;
        let repo = Repository::from_yaml("geometry", yaml).unwrap();
        assert_eq!(repo.vcs_type, "hg");
        assert_eq!(repo.version.as_deref(), Some("1.9.21-0"));
        assert_eq!(repo.release_tag(), Some("release/groovy/{package}/{version}"));
        assert_eq!(repo.status, Some(Status::Maintained));
        assert_eq!(repo.status_description.as_deref(), Some("Bugfixes only"));
        assert_eq!(repo.package_names, vec!["angles", "tf"]);
    }

    #[test]
    fn test_version_without_tags_rejected() {
        let yaml = "url: https://github.com/ros/a.git\nversion: \"1.0\"\n";
        let err = Repository::from_yaml("a", yaml).unwrap_err();
        assert!(matches!(err, Error::MissingTags(ref name) if name == "a"));
    }

    #[test]
    fn test_tags_without_release_rejected() {
        let yaml = r#"
url: https://github.com/ros/a.git
version: "1.0"
tags:
  devel: "devel/{version}"
"#;
        let err = Repository::from_yaml("a", yaml).unwrap_err();
        assert!(matches!(err, Error::MissingReleaseTag(_)));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let yaml = "url: https://github.com/ros/a.git\nstatus: bogus\n";
        match Repository::from_yaml("a", yaml).unwrap_err() {
            Error::InvalidStatus { repository, status } => {
                assert_eq!(repository, "a");
                assert_eq!(status, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_data_omits_defaults() {
        let repo = Repository::from_yaml("a", "url: https://github.com/ros/a.git\n").unwrap();
        let yaml = serde_yaml::to_string(&repo.get_data()).unwrap();
        assert_eq!(yaml, "url: https://github.com/ros/a.git\n");
    }

    #[test]
    fn test_get_data_drops_tags_without_version() {
        let yaml = r#"
url: https://github.com/ros/a.git
tags:
  release: "release/{package}/{version}"
"#;
        let repo = Repository::from_yaml("a", yaml).unwrap();
        assert_eq!(repo.tags.len(), 1);
        assert_eq!(repo.get_data().tags, None);
    }

    #[test]
    fn test_get_data_round_trip() {
        let yaml = r#"
type: svn
url: https://github.com/ros/a.git
version: 0.4.2-1
tags:
  release: "release/{package}/{upstream_version}"
status: end-of-life
status_description: Replaced by b
"#;
        let repo = Repository::from_yaml("a", yaml).unwrap();
        let again = Repository::new("a", repo.get_data()).unwrap();
        assert_eq!(repo, again);

        let data = repo.get_data();
        assert_eq!(data.vcs_type.as_deref(), Some("svn"));
        assert_eq!(data.status.as_deref(), Some("end-of-life"));
    }
}
