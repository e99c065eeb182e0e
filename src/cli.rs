//! Command line interface for the diff review client

use crate::{files, ClientConfig, Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// Anthropic API client for git diff analysis
#[derive(Parser, Debug, Default)]
#[command(name = "diff-review")]
#[command(about = "Anthropic API client for git diff analysis")]
#[command(version = "1.0.0")]
#[command(long_about = r#"
Anthropic API client for git diff analysis

Sends your profile and a git diff to the Anthropic messages API and prints
a concise title and description of the changes.

Examples:
  diff-review "$(git diff)"                       # Use defaults
  diff-review -k custom_key.txt "$(git diff)"     # Custom API key
  diff-review -p my_profile.txt "$(git diff)"     # Custom profile
  diff-review -d changes.diff                     # Read diff from file
  diff-review -o commit_message.md "$(git diff)"  # Save to file
"#)]
pub struct Cli {
    /// Path to a file containing the API key
    /// (default: ~/.config/claude/api_key.txt)
    #[arg(long, short = 'k', value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// Path to the profile file
    /// (default: ~/.config/claude/profile.txt)
    #[arg(long, short = 'p', value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Read the git diff from a file instead of the command line
    #[arg(long, short = 'd', value_name = "FILE")]
    pub diff_file: Option<PathBuf>,

    /// Save results to the specified file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Git diff to analyze, e.g. "$(git diff)"
    pub diff: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate that exactly one diff source was supplied.
    pub fn validate(&self) -> Result<()> {
        match (&self.diff, &self.diff_file) {
            (Some(_), Some(_)) => Err(Error::ConflictingDiffInputs),
            (None, None) => Err(Error::MissingDiff),
            _ => Ok(()),
        }
    }

    /// Convert CLI arguments to a ClientConfig
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig::default().with_verbose(self.verbose)
    }

    /// The API key path, falling back to the default location.
    pub fn key_file_path(&self) -> Result<PathBuf> {
        match &self.key_file {
            Some(path) => Ok(path.clone()),
            None => files::default_api_key_path(),
        }
    }

    /// The profile path, falling back to the default location.
    pub fn profile_path(&self) -> Result<PathBuf> {
        match &self.profile {
            Some(path) => Ok(path.clone()),
            None => files::default_profile_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_argument_is_valid() {
        let cli = Cli {
            diff: Some("diff --git a/x b/x".to_string()),
            ..Default::default()
        };
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_diff_file_is_valid() {
        let cli = Cli {
            diff_file: Some(PathBuf::from("changes.diff")),
            ..Default::default()
        };
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_no_diff_source_is_rejected() {
        let cli = Cli::default();
        assert!(matches!(cli.validate(), Err(Error::MissingDiff)));
    }

    #[test]
    fn test_both_diff_sources_are_rejected() {
        let cli = Cli {
            diff: Some("inline".to_string()),
            diff_file: Some(PathBuf::from("changes.diff")),
            ..Default::default()
        };
        assert!(matches!(cli.validate(), Err(Error::ConflictingDiffInputs)));
    }

    #[test]
    fn test_config_conversion() {
        let cli = Cli {
            verbose: true,
            diff: Some("d".to_string()),
            ..Default::default()
        };

        let config = cli.to_config();
        assert!(config.verbose);
        assert_eq!(config.model, crate::DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.temperature, 0.5);
    }

    #[test]
    fn test_explicit_paths_win_over_defaults() {
        let cli = Cli {
            key_file: Some(PathBuf::from("/tmp/key.txt")),
            profile: Some(PathBuf::from("/tmp/profile.txt")),
            ..Default::default()
        };

        assert_eq!(cli.key_file_path().unwrap(), PathBuf::from("/tmp/key.txt"));
        assert_eq!(cli.profile_path().unwrap(), PathBuf::from("/tmp/profile.txt"));
    }
}
