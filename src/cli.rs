use clap::Parser;
use depsize::application::dto::OutputFormat;
use depsize::config::CliOverrides;
use std::path::PathBuf;

/// Compute the cumulative download size of PyPI packages and their dependencies
#[derive(Parser, Debug)]
#[command(name = "depsize")]
#[command(version)]
#[command(
    about = "Compute the cumulative download size of PyPI packages and their dependencies",
    long_about = None
)]
pub struct Args {
    /// Package names to measure; each one is measured independently
    #[arg(required = true, value_name = "NAME")]
    pub packages: Vec<String>,

    /// Output format: table, markdown or json [default: table]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./depsize.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of an index serving the PyPI JSON API [default: https://pypi.org]
    #[arg(long, value_name = "URL")]
    pub index_url: Option<String>,

    /// HTTP request timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Treat dependency names case- and separator-insensitively (PEP 503)
    #[arg(long)]
    pub normalize_names: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            index_url: self.index_url.clone(),
            format: self.format,
            timeout_secs: self.timeout,
            normalize_names: self.normalize_names,
        }
    }
}
