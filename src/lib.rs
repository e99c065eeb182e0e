//! Diff Review Library
//!
//! Sends a user profile and a git diff to Anthropic's messages API and
//! extracts a concise title and description of the changes.

pub mod buffer;
pub mod cli;
pub mod client;
pub mod error;
pub mod files;
pub mod parser;
pub mod pipeline;
pub mod request;

pub use error::{Error, Result};
pub use parser::ReviewSummary;

/// Model identifier sent with every request
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

/// Configuration for one API invocation
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1024,
            temperature: 0.5,
            verbose: false,
        }
    }
}

impl ClientConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
