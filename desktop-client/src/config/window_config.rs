use common::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_WINDOW_SIDE: f32 = 200.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.width >= MIN_WINDOW_SIDE && self.height >= MIN_WINDOW_SIDE) {
            return Err(format!(
                "window size must be at least {}x{}",
                MIN_WINDOW_SIDE, MIN_WINDOW_SIDE
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 520.0,
        }
    }
}
