//! distro-convert: Release manifest converter
//!
//! This crate provides tools for:
//! - Fetching old-format release manifests and platform targets
//! - Converting them to the versioned `type`/`version` manifest format
//! - Resolving release tag templates against the hosting provider
//! - Reusing tag templates from the previous run's output

pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod tags;

pub use config::Config;
pub use convert::Converter;
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use manifest::{ReleaseManifest, SourceManifest, Targets, TestManifest};
pub use tags::{get_tag_template, github_raw_url, upstream_version};
