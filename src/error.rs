use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a file could not be turned into a [`ByteBuffer`](crate::ByteBuffer).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read contents from file: path is empty")]
    EmptyPath,

    #[error("Failed to read contents from file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A parser backend refused the bytes it was given.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("{0}")]
    Plist(#[from] plist::Error),

    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum BenchError {
    /// The command line was malformed; holds the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("Invalid iteration count '{0}'")]
    InvalidCount(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(
        "Failed to create property list from file {} (iteration {iteration} of {iterations}): {source}",
        path.display()
    )]
    Parse {
        path: PathBuf,
        iteration: u64,
        iterations: u64,
        #[source]
        source: ParseFailure,
    },
}
