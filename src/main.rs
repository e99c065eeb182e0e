//! Diff Review - Main entry point
//!
//! Sends a user profile and a git diff to Anthropic's messages API and
//! prints a concise title and description of the changes.

use diff_review::{cli::Cli, files, pipeline, Error, Result};
use log::debug;
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging; --verbose raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    // Validate arguments
    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Run the application
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let key_path = cli.key_file_path()?;
    debug!("Using API key from: {}", key_path.display());
    if !key_path.exists() {
        return Err(Error::MissingKeyFile { path: key_path });
    }

    let profile_path = cli.profile_path()?;
    debug!("Using profile from: {}", profile_path.display());
    if !profile_path.exists() {
        return Err(Error::MissingProfileFile { path: profile_path });
    }

    let api_key = files::read_api_key(&key_path)?;
    let profile = files::read_file(&profile_path)?;

    let diff = match (&cli.diff_file, &cli.diff) {
        (Some(path), _) => files::read_file(path)?,
        (None, Some(diff)) => diff.clone(),
        (None, None) => return Err(Error::MissingDiff),
    };

    let config = cli.to_config();

    println!("Sending request to Anthropic API...");
    let summary = pipeline::run_review(&config, &api_key, &profile, &diff).await?;

    println!("TITLE: {}\n", summary.title);
    println!("DESCRIPTION:\n{}", summary.description);

    if let Some(output) = &cli.output {
        files::save_results(output, &summary.title, &summary.description)?;
        println!("Results saved to: {}", output.display());
    }

    Ok(())
}
