use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{LastChoices, RoundConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config next to the executable unless `path` overrides it.
pub fn get_config_manager(path: Option<&Path>) -> ClientConfigManager {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub round: RoundConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub last_choices: LastChoices,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.round.validate()?;
        self.window.validate()?;
        self.last_choices.validate()?;
        Ok(())
    }
}
