use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use flipvar_core::VariantError;

/// Error type for flipvar-io operations.
#[derive(Error, Debug)]
pub enum FlipIoError {
    /// An expected input file does not exist.
    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    /// Any other read or write failure.
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of a variant file could not be parsed.
    #[error("Malformed variant on line {line} of {path:?}: {source}")]
    Variant {
        path: PathBuf,
        line: usize,
        #[source]
        source: VariantError,
    },

    /// A variant file without a single variant line.
    #[error("No variants found in {0:?}")]
    NoVariants(PathBuf),

    /// A sequence file without a single record.
    #[error("No sequence records found in {0:?}")]
    NoRecords(PathBuf),
}

impl FlipIoError {
    ///
    /// Attach a path to an [io::Error], singling out missing files.
    ///
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => FlipIoError::NotFound(path.to_path_buf()),
            _ => FlipIoError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Result type alias for flipvar-io operations.
pub type Result<T> = std::result::Result<T, FlipIoError>;
