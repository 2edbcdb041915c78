//! Release tag template resolution
//!
//! A repository's release tags follow one of two naming conventions.
//! The convention is found by probing the hosting provider for a tag of
//! each form, unless the previous run already recorded one for the same
//! version.

use distro_manifest::Repository;
use tracing::{debug, info, warn};

use crate::fetch::Fetcher;
use crate::manifest::ReleaseRepository;
use crate::{Error, Result};

pub const GITHUB_HOST: &str = "github.com";

/// Browsable tree URL of `tag` in the repository at `url`
pub fn github_raw_url(url: &str, tag: &str) -> String {
    let url = url.trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);
    let url = match url.strip_prefix("git://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    };
    format!("{}/tree/{}/", url, tag)
}

/// Version without its packaging revision (`1.2.3-4` -> `1.2.3`)
pub fn upstream_version(version: &str) -> &str {
    version
        .split_once('-')
        .map_or(version, |(upstream, _)| upstream)
}

pub fn is_github_url(url: &str) -> bool {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host == GITHUB_HOST))
        .unwrap_or(false)
}

/// Resolve the release tag template of a repository.
///
/// Returns the template recorded in `last_repo` when its version matches,
/// otherwise probes `release/<dist>/<package>/<version>` and then
/// `release/<package>/<upstream_version>`.
pub fn get_tag_template<F: Fetcher + ?Sized>(
    fetcher: &F,
    distribution: &str,
    repo_name: &str,
    repo: &ReleaseRepository,
    package: &str,
    last_repo: Option<&Repository>,
) -> Result<String> {
    let version = repo.version.as_deref().ok_or_else(|| Error::MissingField {
        distribution: distribution.to_string(),
        repository: repo_name.to_string(),
        field: "version",
    })?;

    if let Some(last) = last_repo {
        if last.version.as_deref() == Some(version) {
            if let Some(template) = last.release_tag() {
                debug!("Reusing tag template of {} {}: {}", repo_name, version, template);
                return Ok(template.to_string());
            }
        }
    }

    if !is_github_url(&repo.url) {
        return Err(Error::UnsupportedHost {
            repository: repo_name.to_string(),
            url: repo.url.clone(),
        });
    }

    let release_tag = format!("release/{}/{}/{}", distribution, package, version);
    match fetcher.probe(&github_raw_url(&repo.url, &release_tag)) {
        Ok(()) => {
            info!("{}: found {}", repo_name, release_tag);
            return Ok(format!("release/{}/{{package}}/{{version}}", distribution));
        }
        Err(e) => {
            warn!("{}: no tag {} ({}), trying upstream version", repo_name, release_tag, e);
        }
    }

    let release_tag = format!("release/{}/{}", package, upstream_version(version));
    match fetcher.probe(&github_raw_url(&repo.url, &release_tag)) {
        Ok(()) => {
            info!("{}: found {}", repo_name, release_tag);
            Ok("release/{package}/{upstream_version}".to_string())
        }
        Err(e) => Err(Error::TagResolution {
            distribution: distribution.to_string(),
            repository: repo_name.to_string(),
            package: package.to_string(),
            source: Box::new(e),
        }),
    }
}
