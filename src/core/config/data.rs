use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::constants::DEFAULT_ENDPOINT;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin of the assistant backend; `/chat` is appended per request
    pub endpoint: Option<String>,
}

/// Keys accepted by `set` and `unset`.
pub const CONFIG_KEYS: [&str; 1] = ["endpoint"];

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    /// Endpoint to use, preferring an explicit override over the stored value.
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> String {
        override_endpoint
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .or_else(|| {
                self.endpoint
                    .as_deref()
                    .map(str::trim)
                    .filter(|endpoint| !endpoint.is_empty())
            })
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string()
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), String> {
        let trimmed = endpoint.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(format!(
                "Endpoint must start with http:// or https:// (got '{trimmed}')"
            ));
        }
        self.endpoint = Some(trimmed.to_string());
        Ok(())
    }

    pub fn unset_endpoint(&mut self) {
        self.endpoint = None;
    }
}
