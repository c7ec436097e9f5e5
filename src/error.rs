use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing the background image
#[derive(Error, Debug)]
pub enum BackgroundError {
    #[error("Failed to read background image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode background image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Background image has no pixels")]
    Empty,
}

pub type BackgroundResult<T> = Result<T, BackgroundError>;
