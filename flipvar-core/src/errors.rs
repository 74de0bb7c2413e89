use thiserror::Error;

use crate::models::Variant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Malformed variant {line:?}: {reason}")]
    Malformed { line: String, reason: &'static str },

    #[error("Variant {variant} is out of range for a sequence of length {length}")]
    PositionOutOfRange { variant: Variant, length: usize },

    #[error("Residue mismatch for variant {variant}: expected '{}' but found '{observed}'", .variant.from_residue)]
    ResidueMismatch { variant: Variant, observed: char },
}

impl VariantError {
    pub(crate) fn malformed(line: &str, reason: &'static str) -> Self {
        VariantError::Malformed {
            line: line.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, VariantError>;
