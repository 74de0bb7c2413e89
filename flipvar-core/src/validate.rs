use crate::errors::{Result, VariantError};
use crate::models::Variant;

/// Outcome of comparing a variant's expected residue with the sequence.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MatchResult {
    Match,
    Mismatch { observed: char },
}

///
/// Check that the residue at the variant's position is the one it expects.
///
/// A mismatch is a normal outcome and is returned as [MatchResult::Mismatch];
/// only a position outside the sequence is an error.
///
/// # Arguments
/// - residues: the sequence to check against
/// - variant: the substitution to validate
///
pub fn check(residues: &[char], variant: &Variant) -> Result<MatchResult> {
    let observed = variant
        .index()
        .and_then(|index| residues.get(index))
        .copied()
        .ok_or(VariantError::PositionOutOfRange {
            variant: *variant,
            length: residues.len(),
        })?;

    if observed == variant.from_residue {
        Ok(MatchResult::Match)
    } else {
        Ok(MatchResult::Mismatch { observed })
    }
}
