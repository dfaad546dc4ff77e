//! CLI argument parsing using clap

use clap::builder::TypedValueParser as _;
use clap::Parser;
use std::path::PathBuf;

/// geodist - pairwise great-circle distance reporting tool
#[derive(Parser, Debug)]
#[command(name = "geodist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of random places to pick from the places list (0 = use all)
    #[arg(short = 'n', long, default_value = "0", allow_negative_numbers = true)]
    pub number: i64,

    /// Path to the places CSV file
    // clap's default PathBuf parser rejects empty values at parse time;
    // use a parser that accepts them so `validate` can report the error.
    #[arg(
        short = 'p',
        long,
        default_value = "data/places.csv",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub path: PathBuf,

    /// Seed for the place sampler (random if omitted)
    ///
    /// Same seed and input produce the same subset, useful for reproducing
    /// a sampled run.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.path.as_os_str().is_empty() {
            anyhow::bail!("path must not be empty");
        }
        Ok(())
    }
}
