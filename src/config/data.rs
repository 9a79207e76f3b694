//! The configuration structs used to build the AppConfig, and their impls.
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub waitlist_config: WaitlistConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Directory holding the subscribers file, created on the first write.
    pub data_dir: PathBuf,
    pub file_name: String,
    /// How many subscribers the inspect endpoint returns.
    pub preview_len: usize,
    /// How many of the latest subscribers the `view-subscribers` tool prints.
    pub recent_len: usize,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Layers `base.toml`, `{environment}.toml` and `APP_` prefixed env variables (in that order)
    /// on top of each other. Nested keys are separated by `__` in env variables,
    /// e.g. `APP_NET_CONFIG__APP_PORT=9000`.
    pub fn load(config_dir: &Path, environment: Environment) -> ConfigResult<Self> {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }
}

impl WaitlistConfig {
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(ConfigError::StringToEnvironmentFail(value)),
        }
    }
}
