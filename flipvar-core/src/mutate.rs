use std::fmt::{self, Display};

use crate::errors::{Result, VariantError};
use crate::models::{Variant, VariantSet};
use crate::validate::{MatchResult, check};

///
/// What to do when the residue found in the sequence differs from the one a
/// variant expects.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum MismatchPolicy {
    /// Leave the residue untouched, record the variant as skipped and carry on.
    #[default]
    SkipAndWarn,
    /// Fail with [VariantError::ResidueMismatch] on the first mismatch.
    Abort,
}

impl Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchPolicy::SkipAndWarn => write!(f, "skip-and-warn"),
            MismatchPolicy::Abort => write!(f, "abort"),
        }
    }
}

/// A variant that was not applied because the residue did not match.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct SkippedVariant {
    pub variant: Variant,
    pub observed: char,
}

impl Display for SkippedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (expected '{}', found '{}')",
            self.variant, self.variant.from_residue, self.observed
        )
    }
}

///
/// Result of applying a [VariantSet] to one sequence.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Mutation {
    pub residues: Vec<char>,
    pub applied: VariantSet,
    pub skipped: Vec<SkippedVariant>,
}

impl Mutation {
    ///
    /// Notation that reverts every applied variant, in application order.
    ///
    pub fn reverting_variants(&self) -> VariantSet {
        self.applied.inverted()
    }
}

///
/// Apply every variant of a set to a copy of the residues.
///
/// Variants are validated and applied in order against the working copy, so a
/// later variant at the same position sees the residue written by an earlier
/// one. Each substitution replaces exactly one residue; the output always has
/// the length of the input.
///
/// # Arguments
/// - residues: the sequence to mutate
/// - variants: the substitutions to apply
/// - policy: how residue mismatches are handled
///
/// # Errors
/// - [VariantError::PositionOutOfRange] for any variant outside the sequence
/// - [VariantError::ResidueMismatch] on a mismatch under [MismatchPolicy::Abort]
///
pub fn apply_all(
    residues: &[char],
    variants: &VariantSet,
    policy: MismatchPolicy,
) -> Result<Mutation> {
    let mut working = residues.to_vec();
    let mut applied = VariantSet::new();
    let mut skipped = Vec::new();

    for variant in variants {
        match check(&working, variant)? {
            MatchResult::Match => {
                // check() succeeded, so the index is in range
                let index = variant.position - 1;
                working[index] = variant.to_residue;
                applied.push(*variant);
            }
            MatchResult::Mismatch { observed } => match policy {
                MismatchPolicy::SkipAndWarn => skipped.push(SkippedVariant {
                    variant: *variant,
                    observed,
                }),
                MismatchPolicy::Abort => {
                    return Err(VariantError::ResidueMismatch {
                        variant: *variant,
                        observed,
                    });
                }
            },
        }
    }

    Ok(Mutation {
        residues: working,
        applied,
        skipped,
    })
}
