//! Converter configuration

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://raw.github.com/ros/rosdistro/master";
pub const DEFAULT_DISTRIBUTIONS: [&str; 2] = ["groovy", "hydro"];

/// Where manifests come from and where converted ones go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the old-format manifests (contains `releases/`)
    pub base_url: String,
    /// Distributions converted by [`crate::Converter::run`]
    pub distributions: Vec<String>,
    /// Directory holding the previous output and receiving the new one
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            distributions: DEFAULT_DISTRIBUTIONS.iter().map(|d| d.to_string()).collect(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn targets_url(&self) -> String {
        format!("{}/releases/targets.yaml", self.base())
    }

    pub fn release_url(&self, distribution: &str) -> String {
        format!("{}/releases/{}.yaml", self.base(), distribution)
    }

    pub fn devel_url(&self, distribution: &str) -> String {
        format!("{}/releases/{}-devel.yaml", self.base(), distribution)
    }

    pub fn release_path(&self, distribution: &str) -> PathBuf {
        self.output_dir.join(format!("{}.yaml", distribution))
    }

    pub fn devel_path(&self, distribution: &str) -> PathBuf {
        self.output_dir.join(format!("{}-devel.yaml", distribution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.distributions, vec!["groovy", "hydro"]);
        assert_eq!(
            config.targets_url(),
            "https://raw.github.com/ros/rosdistro/master/releases/targets.yaml"
        );
    }

    #[test]
    fn test_urls_and_paths() {
        let config = Config {
            base_url: "http://mirror.local/rosdistro/".to_string(),
            distributions: vec![],
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            config.release_url("hydro"),
            "http://mirror.local/rosdistro/releases/hydro.yaml"
        );
        assert_eq!(
            config.devel_url("hydro"),
            "http://mirror.local/rosdistro/releases/hydro-devel.yaml"
        );
        assert_eq!(config.release_path("hydro"), PathBuf::from("/tmp/out/hydro.yaml"));
        assert_eq!(
            config.devel_path("hydro"),
            PathBuf::from("/tmp/out/hydro-devel.yaml")
        );
    }
}
