use std::fmt::{self, Display};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use flipvar_io::read_sequence_ids;

use crate::config::BatchConfig;
use crate::consts::PROGRESS_TEMPLATE;
use crate::errors::BatchError;
use crate::process::{ItemReport, process_item};

///
/// Totals over a finished batch run.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub items: usize,
    pub records: usize,
    pub applied: usize,
    pub skipped: usize,
}

impl BatchSummary {
    fn add(mut self, report: &ItemReport) -> Self {
        self.items += 1;
        self.records += report.records;
        self.applied += report.applied.len();
        self.skipped += report.skipped;
        self
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sequence ids, {} records, {} variants applied, {} skipped",
            self.items, self.records, self.applied, self.skipped
        )
    }
}

///
/// Flip the variants of every sequence ID listed in the configured ID file.
///
/// IDs are processed in list order, or on the rayon pool when
/// [BatchConfig::parallel] is set. The first fatal error stops the run and is
/// returned; in sequential mode no ID after the failing one is touched.
///
/// # Arguments
/// - config: ID list, directory layout and processing options
///
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let ids = read_sequence_ids(&config.sequence_list).map_err(BatchError::InputList)?;

    info!(
        "Flipping variants for {} sequence ids (mismatch policy: {})",
        ids.len(),
        config.policy
    );
    let start = Instant::now();

    let pb = if config.show_progress {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        ProgressBar::new(ids.len() as u64).with_style(style)
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<ItemReport> = if config.parallel {
        ids.par_iter()
            .map(|id| run_item(config, id, &pb))
            .collect::<Result<_, _>>()?
    } else {
        ids.iter()
            .map(|id| run_item(config, id, &pb))
            .collect::<Result<_, _>>()?
    };

    pb.finish_with_message("Done!");

    let summary = reports.iter().fold(BatchSummary::default(), BatchSummary::add);
    info!(
        "Finished in {:.2}s: {}",
        start.elapsed().as_secs_f64(),
        summary
    );

    Ok(summary)
}

fn run_item(config: &BatchConfig, id: &str, pb: &ProgressBar) -> Result<ItemReport, BatchError> {
    let item = config.layout.item(id);

    config
        .layout
        .ensure_output_dirs()
        .map_err(BatchError::OutputDir)?;

    let report = process_item(&item, config.policy).map_err(|source| BatchError::Item {
        id: id.to_string(),
        source,
    })?;

    debug!(
        "{}: {} records, {} variants applied, {} skipped",
        report.id,
        report.records,
        report.applied.len(),
        report.skipped
    );
    pb.inc(1);

    Ok(report)
}
