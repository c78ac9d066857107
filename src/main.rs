use std::process::ExitCode;

use clap::Parser;
use whiteout::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    ExitCode::from(cli::execute(&cli, &mut stdout.lock()))
}
