use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolidError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown color '{0}' (expected one of: green, blue, white, yellow, black)")]
    UnknownColor(String),

    #[error("unknown size '{0}' (expected one of: small, medium, large, xlarge, xxlarge)")]
    UnknownSize(String),

    #[error("entry {index} is out of range (journal has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SolidError>;
