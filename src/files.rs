//! File collaborators: default config paths, file reading, result output

use crate::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the API key file
pub fn default_api_key_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("api_key.txt"))
}

/// Default location of the profile file
pub fn default_profile_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("profile.txt"))
}

fn config_dir() -> Result<PathBuf> {
    let home = dirs_next::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config").join("claude"))
}

/// Read a file verbatim.
pub fn read_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Read the API key, trimming surrounding whitespace left by editors.
pub fn read_api_key(path: &Path) -> Result<String> {
    let key = read_file(path)?.trim().to_string();
    debug!("Successfully read API key (length: {})", key.len());
    Ok(key)
}

/// Persist the parsed result as `# {title}\n\n{description}`.
pub fn save_results(path: &Path, title: &str, description: &str) -> Result<()> {
    fs::write(path, format!("# {}\n\n{}", title, description))?;
    Ok(())
}
