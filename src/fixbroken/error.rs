use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Cannot list directory {}: {source}", dir.display())]
    DirectoryListing {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ambiguous match in {}: {count} files end with {suffix}", dir.display())]
    AmbiguousMatch {
        dir: PathBuf,
        suffix: String,
        count: usize,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FixError>;
