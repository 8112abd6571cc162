use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use incident_prune::cli::Cli;
use incident_prune::prune_file;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    let report = prune_file(&cli.input, &cli.output, &options).with_context(|| {
        format!(
            "pruning {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    info!(
        "{} rows, {} -> {} columns",
        report.rows, report.columns_in, report.columns_out
    );
    Ok(())
}
