//! Commentary configuration from environment variables.

use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 4000;

/// Which provider the client should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Scripted,
    /// External command line, split on whitespace.
    Command(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryConfig {
    pub enabled: bool,
    pub provider: ProviderKind,
    /// Upper bound for a single provider call.
    pub timeout: Duration,
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: ProviderKind::Scripted,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl CommentaryConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_COMMENTARY_DISABLED`: `1`/`true` turns commentary off
    /// - `SNAKE_COMMENTARY_CMD`: external provider command (scripted otherwise)
    /// - `SNAKE_COMMENTARY_TIMEOUT_MS`: per-request timeout
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = !get("SNAKE_COMMENTARY_DISABLED")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let provider = match get("SNAKE_COMMENTARY_CMD") {
            Some(cmd) if !cmd.trim().is_empty() => ProviderKind::Command(cmd.trim().to_string()),
            _ => ProviderKind::Scripted,
        };

        let timeout = get("SNAKE_COMMENTARY_TIMEOUT_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS));

        Self {
            enabled,
            provider,
            timeout,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
