use std::path::{Path, PathBuf};

use flipvar_core::MismatchPolicy;
use flipvar_io::BatchLayout;

///
/// Everything a batch run needs to know.
///
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// File with one sequence ID per line.
    pub sequence_list: PathBuf,
    pub layout: BatchLayout,
    pub policy: MismatchPolicy,
    /// Process IDs on the rayon thread pool instead of one after the other.
    pub parallel: bool,
    pub show_progress: bool,
}

impl BatchConfig {
    pub fn new<T: AsRef<Path>>(sequence_list: T, layout: BatchLayout) -> Self {
        BatchConfig {
            sequence_list: sequence_list.as_ref().to_path_buf(),
            layout,
            policy: MismatchPolicy::default(),
            parallel: false,
            show_progress: false,
        }
    }

    pub fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
