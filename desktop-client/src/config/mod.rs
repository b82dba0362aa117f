mod last_choices;
mod main_config;
mod round_config;
mod window_config;

pub use last_choices::LastChoices;
pub use main_config::{ClientConfigManager, Config, get_config_manager};
pub use round_config::RoundConfig;
pub use window_config::WindowConfig;
