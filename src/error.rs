//! Error types for the diff review client

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("API key file not found at {path}\nCreate it first or specify a key file with the -k option")]
    MissingKeyFile { path: PathBuf },

    #[error("Profile file not found at {path}\nCreate it first or specify a profile with the -p option")]
    MissingProfileFile { path: PathBuf },

    #[error("Git diff is required (either as an argument or via the -d option)")]
    MissingDiff,

    #[error("Pass the git diff either as an argument or via the -d option, not both")]
    ConflictingDiffInputs,

    #[error("API request failed with HTTP code {status}\nResponse: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },
}
