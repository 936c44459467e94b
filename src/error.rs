use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("did not converge after {iterations} iterations (last delta: {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot list corpus: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidArgument(msg.into())
}
