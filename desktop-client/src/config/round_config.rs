use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_RESTART_DELAY_MS: u64 = 500;
pub const MAX_RESTART_DELAY_MS: u64 = 60_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RoundConfig {
    /// Pause between the end of a round and the next one.
    pub restart_delay_ms: u64,
}

impl RoundConfig {
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Validate for RoundConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_RESTART_DELAY_MS..=MAX_RESTART_DELAY_MS).contains(&self.restart_delay_ms) {
            return Err(format!(
                "restart_delay_ms must be between {} and {}",
                MIN_RESTART_DELAY_MS, MAX_RESTART_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            restart_delay_ms: 3500,
        }
    }
}
