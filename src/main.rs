use anyhow::{Context, Result};
use autostat::cli::Cli;
use autostat::{run, write_outputs, RunConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(source) = args.source {
        config.data.source = source;
    }
    if let Some(dir) = args.output_dir {
        config.report.output_dir = dir;
    }

    let analysis = run(&config)
        .with_context(|| format!("Analysis of '{}' failed", config.data.source))?;
    let written = write_outputs(&analysis.report, &config.report).with_context(|| {
        format!(
            "Failed to write reports to {}",
            config.report.output_dir.display()
        )
    })?;

    for path in &written {
        info!(path = %path.display(), "output written");
    }
    let failures = analysis.report.failures().count();
    if failures > 0 {
        eprintln!("{failures} analysis step(s) failed; see the report for details");
    }
    Ok(())
}
