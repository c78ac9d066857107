use std::{io::Write, path::PathBuf};

use clap::Parser;

use crate::{batch::run_batch, config::StripConfig};

pub const USAGE: &str = "Usage: whiteout <file1> <file2> ...";

/// No input paths were given
pub const EXIT_USAGE: u8 = 1;
/// At least one file failed to decode or encode, or the batch was aborted
pub const EXIT_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "whiteout", version)]
#[command(about = "Make near-white pixels transparent, rewriting each image in place as PNG", long_about = None)]
pub struct Cli {
    /// Images to rewrite in place
    pub paths: Vec<PathBuf>,

    /// Process files concurrently
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Stop at the first file that cannot be decoded or written
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    pub fn strip_config(&self) -> StripConfig {
        StripConfig::default()
            .with_parallel_files(self.parallel)
            .with_fail_fast(self.fail_fast)
    }
}

/// Run the command line, writing progress to `out`. Returns the exit code.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    if cli.paths.is_empty() {
        if let Err(err) = writeln!(out, "{USAGE}") {
            log::error!("could not write usage: {}", err);
        }
        return EXIT_USAGE;
    }

    match run_batch(&cli.paths, &cli.strip_config(), out) {
        Ok(summary) => {
            log::debug!("{:?}", summary);
            if summary.has_failures() { EXIT_FAILED } else { 0 }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            EXIT_FAILED
        }
    }
}
