//! Manifest conversion
//!
//! Turns the old-format `releases/<dist>.yaml` and `releases/<dist>-devel.yaml`
//! documents into versioned release and test manifests on disk.

use std::path::{Path, PathBuf};

use distro_manifest::ReleaseFile;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::manifest::{
    convert_packages, parse_targets, to_yaml, ReleaseManifest, ReleaseRepository, ReleaseTags,
    SourceManifest, Targets, TestManifest, TestRepository,
};
use crate::tags::get_tag_template;
use crate::{Error, Result};

pub struct Converter<F: Fetcher> {
    config: Config,
    fetcher: F,
}

impl<F: Fetcher> Converter<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the platforms supported by each distribution
    pub fn get_targets(&self) -> Result<Targets> {
        let url = self.config.targets_url();
        info!("Load \"{}\"", url);
        parse_targets(&self.fetcher.fetch_text(&url)?)
    }

    fn load_source(&self, url: &str) -> Result<SourceManifest> {
        info!("Load \"{}\"", url);
        SourceManifest::from_yaml(&self.fetcher.fetch_text(url)?)
    }

    /// Previous release output for `distribution`, if one was written
    pub fn load_last_release(&self, distribution: &str) -> Result<Option<ReleaseFile>> {
        let path = self.config.release_path(distribution);
        if !path.exists() {
            debug!("No previous output at {:?}", path);
            return Ok(None);
        }

        debug!("Reusing tags from {:?}", path);
        Ok(Some(ReleaseFile::from_file(distribution, &path)?))
    }

    /// Build the versioned release manifest for `distribution`
    pub fn build_release(
        &self,
        distribution: &str,
        source: &SourceManifest,
        targets: &Targets,
        last: Option<&ReleaseFile>,
    ) -> Result<ReleaseManifest> {
        let platforms = targets
            .get(distribution)
            .ok_or_else(|| Error::UnknownDistribution(distribution.to_string()))?;

        let mut output = ReleaseManifest::new(platforms.clone());

        for (repo_name, input_repo) in &source.repositories {
            let packages = match &input_repo.packages {
                Some(_) if input_repo.has_implicit_package(repo_name) => None,
                Some(packages) => Some(convert_packages(packages)),
                None => None,
            };

            let mut output_repo = ReleaseRepository {
                packages,
                tags: None,
                url: input_repo.url.clone(),
                version: input_repo.version.clone(),
            };

            if output_repo.version.is_some() {
                let last_repo = last.and_then(|file| file.repository(repo_name));
                let release = get_tag_template(
                    &self.fetcher,
                    distribution,
                    repo_name,
                    &output_repo,
                    input_repo.probe_package(repo_name),
                    last_repo,
                )?;
                output_repo.tags = Some(ReleaseTags { release });
            }

            output.repositories.insert(repo_name.clone(), output_repo);
        }

        Ok(output)
    }

    /// Convert `releases/<dist>.yaml` and write `<dist>.yaml`
    pub fn convert_release(&self, distribution: &str, targets: &Targets) -> Result<PathBuf> {
        let source = self.load_source(&self.config.release_url(distribution))?;
        let last = self.load_last_release(distribution)?;

        let output = self.build_release(distribution, &source, targets, last.as_ref())?;

        let path = self.config.release_path(distribution);
        write_manifest(&path, &output)?;
        info!(
            "Wrote {} repositories for {} -> {:?}",
            output.repositories.len(),
            distribution,
            path
        );
        Ok(path)
    }

    /// Build the versioned test manifest for `distribution`
    pub fn build_test(&self, distribution: &str, source: &SourceManifest) -> Result<TestManifest> {
        let mut output = TestManifest::new();

        for (repo_name, input_repo) in &source.repositories {
            let vcs_type = input_repo.vcs_type.clone().ok_or_else(|| Error::MissingField {
                distribution: distribution.to_string(),
                repository: repo_name.clone(),
                field: "type",
            })?;

            output.repositories.insert(
                repo_name.clone(),
                TestRepository {
                    packages: input_repo.packages.as_ref().map(convert_packages),
                    vcs_type,
                    url: input_repo.url.clone(),
                    version: input_repo.version.clone(),
                },
            );
        }

        Ok(output)
    }

    /// Convert `releases/<dist>-devel.yaml` and write `<dist>-devel.yaml`
    pub fn convert_test(&self, distribution: &str) -> Result<PathBuf> {
        let source = self.load_source(&self.config.devel_url(distribution))?;
        let output = self.build_test(distribution, &source)?;

        let path = self.config.devel_path(distribution);
        write_manifest(&path, &output)?;
        info!(
            "Wrote {} test repositories for {} -> {:?}",
            output.repositories.len(),
            distribution,
            path
        );
        Ok(path)
    }

    /// Convert every configured distribution, release first
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let targets = self.get_targets()?;

        let mut written = Vec::new();
        for distribution in &self.config.distributions {
            written.push(self.convert_release(distribution, &targets)?);
            written.push(self.convert_test(distribution)?);
        }
        Ok(written)
    }
}

fn write_manifest<T: Serialize>(path: &Path, manifest: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_yaml(manifest)?)?;
    Ok(())
}
