//! Parsing of the compact `<from><position><to>` notation.
//!
//! Serialization is the [std::fmt::Display] impl of [Variant]; parsing is its
//! [FromStr] impl, so `line.parse::<Variant>()` and `variant.to_string()` are
//! exact inverses for well-formed input.
use std::str::FromStr;

use crate::errors::{Result, VariantError};
use crate::models::Variant;

impl FromStr for Variant {
    type Err = VariantError;

    ///
    /// Parse one line of variant notation.
    ///
    /// The first character is the expected residue, the last one the
    /// replacement and everything in between the 1-based position. The caller
    /// is expected to strip whitespace first.
    ///
    fn from_str(line: &str) -> Result<Self> {
        if line.trim() != line {
            return Err(VariantError::malformed(
                line,
                "leading or trailing whitespace must be stripped",
            ));
        }

        let mut chars = line.chars();
        let (Some(from_residue), Some(to_residue)) = (chars.next(), chars.next_back()) else {
            return Err(VariantError::malformed(line, "expected at least 3 characters"));
        };

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(VariantError::malformed(line, "expected at least 3 characters"));
        }

        // a digit residue would make the position boundaries ambiguous (`123`)
        if from_residue.is_ascii_digit() || to_residue.is_ascii_digit() {
            return Err(VariantError::malformed(line, "residues cannot be digits"));
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VariantError::malformed(
                line,
                "position must be a base-10 integer",
            ));
        }

        let position: usize = digits
            .parse()
            .map_err(|_| VariantError::malformed(line, "position is too large"))?;

        if position == 0 {
            return Err(VariantError::malformed(line, "position must be 1 or greater"));
        }

        Ok(Variant::new(from_residue, position, to_residue))
    }
}
