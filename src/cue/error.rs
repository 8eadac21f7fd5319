use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Output file already exists: {0}, use --force to overwrite")]
    OutputAlreadyExists(PathBuf),
}

pub type CueResult<T> = Result<T, CueError>;
