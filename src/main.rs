//! Entry point for the interactive country translator.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use country_translator::cli::Args;
use country_translator::codes::{
    CountryCodeConverter,
    LanguageCodeConverter,
    TableError,
};
use country_translator::translator::{
    JsonTranslator,
    LoadError,
};
use country_translator::Session;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Anything that can stop the program before or during a session.
#[derive(Error, Debug)]
enum StartupError {
    #[error(transparent)]
    Dataset(#[from] LoadError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Load failures are fatal: there is no session without data.
            tracing::error!(%error, "failed to start");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), StartupError> {
    let translator = match &args.data {
        Some(path) => JsonTranslator::from_path(path)?,
        None => JsonTranslator::bundled()?,
    };
    let countries = CountryCodeConverter::bundled()?;
    let languages = LanguageCodeConverter::bundled()?;

    let session = Session::new(&translator, &countries, &languages);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
