use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] distro_manifest::Error),

    #[error("No targets for distribution: {0}")]
    UnknownDistribution(String),

    #[error("Repository '{repository}' in {distribution} is missing field '{field}'")]
    MissingField {
        distribution: String,
        repository: String,
        field: &'static str,
    },

    #[error("Repository '{repository}' is not hosted on github.com: {url}")]
    UnsupportedHost { repository: String, url: String },

    #[error("Could not determine tag using {distribution}, {repository}, {package}: {source}")]
    TagResolution {
        distribution: String,
        repository: String,
        package: String,
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
