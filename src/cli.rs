//! Command line interface

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autostat")]
#[command(version)]
#[command(about = "Statistical analysis and reporting over an automobile dataset", long_about = None)]
pub struct Cli {
    /// TOML run configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bundled dataset name ("cars") or CSV path; overrides the config
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Directory for the generated reports; overrides the config
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
