use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{
        catalog::Product,
        money::DEFAULT_CURRENCY,
        notification::DEFAULT_NOTIFICATION_MS,
        order::{DEFAULT_ENDPOINT, DEFAULT_GREETING},
    },
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Shop identity and checkout settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub name: String,
    /// Prefix of the total in the order message
    pub currency: String,
    /// Messaging endpoint the order is handed to, e.g. `https://wa.me/<number>`
    pub order_endpoint: String,
    pub greeting: String,
    pub notification_ms: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Jewelry Store".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            order_endpoint: DEFAULT_ENDPOINT.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub catalog: Vec<Product>,
}

/// The embedded defaults shipped with the binary
pub fn default_config() -> Result<Config, ConfigError> {
    json5::from_str(CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
}

impl Config {
    /// Loads user config files from the config directory over the embedded defaults.
    /// Every user file is optional.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(utils::get_data_dir(), utils::get_config_dir())
    }

    pub fn load_from(data_dir: PathBuf, config_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = default_config()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config, found_config);
        Ok(cfg)
    }

    fn merge_defaults(&mut self, default_config: Config, found_config: bool) {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }

        if !found_config {
            self.storefront = default_config.storefront;
        }

        if self.catalog.is_empty() {
            self.catalog = default_config.catalog;
        }
    }
}
