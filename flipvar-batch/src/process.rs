use log::warn;

use flipvar_core::{MismatchPolicy, SequenceRecord, VariantSet};
use flipvar_io::{BatchItem, FastaWrite, VariantWrite, read_fasta, read_variants};

use crate::errors::ItemError;

///
/// What happened to one sequence ID.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub id: String,
    pub records: usize,
    /// Variants applied to at least one record, in order of first application.
    pub applied: VariantSet,
    /// Number of (record, variant) pairs skipped on a residue mismatch.
    pub skipped: usize,
}

///
/// Flip the variants of a single sequence ID.
///
/// Reads the variant file and every FASTA record, applies the variants to each
/// record and writes the mutated records plus the inverted notation of the
/// applied variants. Nothing is written unless every record was processed.
///
/// # Arguments
/// - item: input and output paths for the ID
/// - policy: how residue mismatches are handled
///
pub fn process_item(item: &BatchItem, policy: MismatchPolicy) -> Result<ItemReport, ItemError> {
    let variants = read_variants(&item.in_variants)?;
    let records = read_fasta(&item.in_fasta)?;

    let mut mutated: Vec<SequenceRecord> = Vec::with_capacity(records.len());
    let mut applied = VariantSet::new();
    let mut skipped = 0;

    for record in &records {
        let (record_out, mutation) = record.apply(&variants, policy)?;

        for skip in &mutation.skipped {
            warn!(
                "Amino acid mismatch detected for {} (record {}): skipping {}",
                item.id, record.id, skip
            );
        }
        skipped += mutation.skipped.len();

        if mutated.is_empty() {
            applied = mutation.applied;
        } else {
            for variant in &mutation.applied {
                if !applied.contains(variant) {
                    applied.push(*variant);
                }
            }
        }

        mutated.push(record_out);
    }

    mutated.write_fasta(&item.out_fasta)?;
    applied.inverted().write_variants(&item.out_variants)?;

    Ok(ItemReport {
        id: item.id.clone(),
        records: mutated.len(),
        applied,
        skipped,
    })
}
