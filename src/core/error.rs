//! Centralised error type used across the crate.
//!
//! Conversion itself is total; only the I/O around it can fail, and every
//! failure ends the run.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening or reading an input file failed.
    #[error("{}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing converted text to the output sink failed.
    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
