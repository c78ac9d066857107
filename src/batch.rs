use std::{
    io::Write,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    config::StripConfig,
    error::{Result, WhiteoutError},
    strip::{StripReport, strip_background},
};

/// What happened to one path of a batch.
#[derive(Debug)]
pub enum FileOutcome {
    Saved(StripReport),
    NotFound,
    Failed(WhiteoutError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Saved(_) => self.saved += 1,
            FileOutcome::NotFound => self.not_found += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Strip every path in place, writing progress lines to `out`.
///
/// Missing files are reported and skipped. Decode and encode failures are
/// reported and skipped too, unless `config.fail_fast` is set, in which case
/// the first one ends the batch as `Err` and later paths are not touched.
pub fn run_batch<P, W>(paths: &[P], config: &StripConfig, out: &mut W) -> Result<BatchSummary>
where
    P: AsRef<Path> + Sync,
    W: Write,
{
    if config.parallel_files && config.fail_fast {
        log::warn!("--fail-fast processes files sequentially, ignoring --parallel");
    }

    if config.runs_parallel() {
        run_parallel(paths, config, out)
    } else {
        run_sequential(paths, config, out)
    }
}

fn run_sequential<P, W>(paths: &[P], config: &StripConfig, out: &mut W) -> Result<BatchSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            report(out, path, &FileOutcome::NotFound)?;
            summary.not_found += 1;
            continue;
        }

        writeln!(out, "Processing {}...", path.display())?;
        out.flush()?;

        let outcome = match strip_background(path, path, config) {
            Ok(stripped) => FileOutcome::Saved(stripped),
            Err(err) if config.fail_fast => {
                log::error!("aborting batch: {}", err);
                return Err(err);
            }
            Err(err) => FileOutcome::Failed(err),
        };
        report(out, path, &outcome)?;
        summary.record(&outcome);
    }
    Ok(summary)
}

/// Files are stripped on the rayon pool, progress is written afterwards
/// grouped per file and in input order.
fn run_parallel<P, W>(paths: &[P], config: &StripConfig, out: &mut W) -> Result<BatchSummary>
where
    P: AsRef<Path> + Sync,
    W: Write,
{
    let outcomes: Vec<(PathBuf, FileOutcome)> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            (path.to_path_buf(), process_file(path, config))
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (path, outcome) in &outcomes {
        if !matches!(outcome, FileOutcome::NotFound) {
            writeln!(out, "Processing {}...", path.display())?;
        }
        report(out, path, outcome)?;
        summary.record(outcome);
    }
    Ok(summary)
}

/// Strip a single path in place.
pub fn process_file(path: &Path, config: &StripConfig) -> FileOutcome {
    if !path.exists() {
        return FileOutcome::NotFound;
    }
    match strip_background(path, path, config) {
        Ok(stripped) => FileOutcome::Saved(stripped),
        Err(WhiteoutError::NotFound(_)) => FileOutcome::NotFound,
        Err(err) => FileOutcome::Failed(err),
    }
}

fn report<W: Write>(out: &mut W, path: &Path, outcome: &FileOutcome) -> Result {
    match outcome {
        FileOutcome::Saved(_) => writeln!(out, "Saved to {}", path.display())?,
        FileOutcome::NotFound => writeln!(out, "File not found: {}", path.display())?,
        FileOutcome::Failed(err) => {
            log::error!("{}", err);
            writeln!(out, "Failed to process {}: {}", path.display(), err)?;
        }
    }
    out.flush()?;
    Ok(())
}
