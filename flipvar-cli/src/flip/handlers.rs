use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use flipvar_batch::{BatchConfig, BatchSummary, run_batch};
use flipvar_io::BatchLayout;

use super::cli::*;

fn get_path<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("A path for --{} is required.", name))
}

pub fn run_flip(matches: &ArgMatches) -> Result<BatchSummary> {
    let seqs = get_path(matches, SEQS_ARG)?;
    let layout = BatchLayout::new(
        get_path(matches, VARDIR_ARG)?,
        get_path(matches, FASTADIR_ARG)?,
        get_path(matches, OUTVARDIR_ARG)?,
        get_path(matches, OUTFASTADIR_ARG)?,
    );

    info!(
        "Writing mutated sequences to {:?} and flipped variants to {:?}",
        layout.out_fasta_dir, layout.out_variant_dir
    );

    let config = BatchConfig::new(seqs, layout).with_progress(true);
    let summary = run_batch(&config)?;

    Ok(summary)
}
