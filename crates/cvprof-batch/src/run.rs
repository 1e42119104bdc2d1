//! Multi-file run execution.

use std::path::{Path, PathBuf};

use cvprof_analysis::process_file;
use cvprof_core::{FrequencyResultSet, MeasurementConfig};
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Configuration for run execution.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Minimum file count to use parallel execution (below this,
    /// sequential is faster).
    pub min_files_for_parallel: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            min_files_for_parallel: 2,
        }
    }
}

impl RunConfig {
    /// Set the minimum parallel threshold.
    pub fn with_min_parallel(mut self, min: usize) -> Self {
        self.min_files_for_parallel = min;
        self
    }
}

/// Outcome for one input file: a complete result set or that file's error.
#[derive(Debug)]
pub struct FileOutcome {
    /// Source path.
    pub path: PathBuf,
    /// The file's result, or the error that aborted its pipeline.
    pub result: std::result::Result<FrequencyResultSet, cvprof_analysis::Error>,
}

/// Result of a multi-file run, in input order.
#[derive(Debug)]
pub struct RunResult {
    /// One outcome per input file.
    pub outcomes: Vec<FileOutcome>,
}

impl RunResult {
    /// Successfully processed files.
    pub fn successes(&self) -> impl Iterator<Item = (&Path, &FrequencyResultSet)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.path.as_path(), r)))
    }

    /// Files whose pipeline failed.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &cvprof_analysis::Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }

    /// Number of successfully processed files.
    pub fn num_successes(&self) -> usize {
        self.successes().count()
    }
}

/// Process a set of measurement files against one shared configuration.
///
/// Files are independent: each runs the full parse-to-integrate pipeline
/// on its own worker when the run is large enough for parallel execution
/// (and more than one rayon thread is available); otherwise sequentially.
/// Output order matches input order either way.
///
/// Per-file failures are recorded and the run continues. A run where no
/// file succeeds is the only total failure, returned as
/// `Error::NoUsableFiles`.
pub fn process_files(
    paths: &[PathBuf],
    config: &MeasurementConfig,
    run_config: &RunConfig,
) -> Result<RunResult> {
    let use_parallel = paths.len() >= run_config.min_files_for_parallel
        && rayon::current_num_threads() > 1;

    let outcomes: Vec<FileOutcome> = if use_parallel {
        log::info!(
            "processing {} files on {} threads",
            paths.len(),
            rayon::current_num_threads()
        );
        paths
            .par_iter()
            .map(|path| FileOutcome {
                path: path.clone(),
                result: process_file(path, config),
            })
            .collect()
    } else {
        paths
            .iter()
            .map(|path| FileOutcome {
                path: path.clone(),
                result: process_file(path, config),
            })
            .collect()
    };

    let num_successes = outcomes.iter().filter(|o| o.result.is_ok()).count();
    if num_successes == 0 {
        return Err(Error::NoUsableFiles {
            failed: outcomes.len(),
        });
    }

    for (path, err) in outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err().map(|e| (&o.path, e)))
    {
        log::warn!("{}: {err}", path.display());
    }

    Ok(RunResult { outcomes })
}
