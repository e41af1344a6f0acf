//! Command-line surface

use std::path::PathBuf;

use clap::Parser;

/// Interactive lookup of country names in the languages a dataset knows
/// them by.
#[derive(Debug, Parser)]
#[command(name = "country-translator", version, about)]
pub struct Args {
    /// Path to a JSON dataset overriding the bundled sample
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}
