use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository '{0}' declares a version but no tags")]
    MissingTags(String),

    #[error("Repository '{0}' declares tags without a 'release' tag")]
    MissingReleaseTag(String),

    #[error("Invalid status '{status}' for repository '{repository}'")]
    InvalidStatus { repository: String, status: String },

    #[error("Invalid release file '{name}': {reason}")]
    Format { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
