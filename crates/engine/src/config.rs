//! Session configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{clamp_initial_speed, BoardSize, INITIAL_SPEED_MS};

/// Game session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Tick interval the next game starts at (player adjustable).
    pub initial_speed_ms: u32,
    /// Seed for food placement.
    pub seed: u32,
    pub board: BoardSize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_speed_ms: INITIAL_SPEED_MS,
            seed: 1,
            board: BoardSize::default(),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_INITIAL_SPEED_MS`: starting tick interval, clamped to 50..=300
    /// - `SNAKE_SEED`: fixed food seed (defaults to the clock)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an explicit variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let initial_speed_ms = get("SNAKE_INITIAL_SPEED_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(clamp_initial_speed)
            .unwrap_or(INITIAL_SPEED_MS);

        let seed = get("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(seed_from_clock);

        Self {
            initial_speed_ms,
            seed,
            board: BoardSize::default(),
        }
    }
}

/// A seed that differs between runs.
pub fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
