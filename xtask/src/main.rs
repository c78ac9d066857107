use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for whiteout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Formatting, lints, build and tests
    Ci,
    /// Criterion benchmarks, forwarding a name filter
    Bench { filter: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => ci(),
        Commands::Bench { filter } => bench(filter.as_deref()),
    }
}

fn ci() -> Result<()> {
    run_command("cargo", &["fmt", "--all", "--check"])?;
    run_command(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--all-features",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    run_command("cargo", &["build", "--workspace", "--all-features"])?;
    run_command("cargo", &["test", "--workspace", "--all-features"])?;
    Ok(())
}

fn bench(filter: Option<&str>) -> Result<()> {
    let mut args = vec!["bench", "-p", "whiteout", "--bench", "whiteout_transform"];
    if let Some(filter) = filter {
        args.extend(["--", filter]);
    }
    run_command("cargo", &args)
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    use std::process::Command;
    let status = Command::new(cmd).args(args).status()?;
    if !status.success() {
        anyhow::bail!("Command failed: {} {}", cmd, args.join(" "));
    }
    Ok(())
}
