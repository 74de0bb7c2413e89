use std::fmt::{self, Display};

use crate::errors::Result;
use crate::models::VariantSet;
use crate::mutate::{MismatchPolicy, Mutation, apply_all};

///
/// An identified protein sequence as read from a sequence file.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SequenceRecord {
    pub id: String,
    pub description: Option<String>,
    pub residues: Vec<char>,
}

impl SequenceRecord {
    pub fn new(id: &str, description: Option<&str>, sequence: &str) -> Self {
        SequenceRecord {
            id: id.to_string(),
            description: description.map(str::to_string),
            residues: sequence.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    ///
    /// Residues joined back into text, for the I/O boundary.
    ///
    pub fn sequence(&self) -> String {
        self.residues.iter().collect()
    }

    ///
    /// Apply a set of variants to this record.
    ///
    /// Returns a new record carrying the same id and description together with
    /// the [Mutation] describing what was applied and what was skipped.
    ///
    pub fn apply(
        &self,
        variants: &VariantSet,
        policy: MismatchPolicy,
    ) -> Result<(SequenceRecord, Mutation)> {
        let mutation = apply_all(&self.residues, variants, policy)?;
        let record = SequenceRecord {
            id: self.id.clone(),
            description: self.description.clone(),
            residues: mutation.residues.clone(),
        };

        Ok((record, mutation))
    }
}

impl Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} residues)", self.id, self.len())
    }
}
