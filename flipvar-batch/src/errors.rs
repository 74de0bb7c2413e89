use thiserror::Error;

use flipvar_core::VariantError;
use flipvar_io::FlipIoError;

/// Why a single sequence ID could not be processed.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error(transparent)]
    Io(#[from] FlipIoError),

    #[error(transparent)]
    Variant(#[from] VariantError),
}

/// Fatal errors of a batch run. Any of them stops the whole run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Error reading file with sequence IDs: {0}")]
    InputList(#[source] FlipIoError),

    #[error("Error creating output directory: {0}")]
    OutputDir(#[source] FlipIoError),

    #[error("Error processing sequence id {id}: {source}")]
    Item {
        id: String,
        #[source]
        source: ItemError,
    },
}

impl BatchError {
    /// The sequence ID the error belongs to, if any.
    pub fn sequence_id(&self) -> Option<&str> {
        match self {
            BatchError::Item { id, .. } => Some(id),
            _ => None,
        }
    }
}
