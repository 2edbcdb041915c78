//! distro-manifest: Repository records for versioned distribution manifests
//!
//! This crate provides:
//! - Validated repository records decoded from manifest entries
//! - The set of valid maintenance statuses
//! - Lenient scalar decoding for hand-edited YAML
//! - Release file loading for reuse of previously resolved tags

pub mod error;
pub mod release_file;
pub mod repository;
pub mod scalar;
pub mod status;

pub use error::{Error, Result};
pub use release_file::ReleaseFile;
pub use repository::{Repository, RepositoryData, DEFAULT_VCS_TYPE};
pub use status::{Status, VALID_STATUSES};
