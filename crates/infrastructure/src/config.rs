use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}
fn default_acquire_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ImagingConfig {
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_max_width() -> u32 {
    1024
}
fn default_jpeg_quality() -> u8 {
    70
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub imaging: ImagingConfig,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info,yardlog=debug".to_string()
}

impl AppConfig {
    /// Load configuration from `config_dir`, the environment and `DATABASE_URL`.
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let database_url = std::env::var("DATABASE_URL").ok();
        Self::load_from(config_dir, &run_mode, database_url)
    }

    pub fn load_from(
        config_dir: &str,
        run_mode: &str,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // 3. Shared settings, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // 2. Per run mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // 1. Environment variables (e.g. YARDLOG__DATABASE__URL=postgres://...)
            .add_source(Environment::with_prefix("YARDLOG").separator("__"))
            // The conventional DATABASE_URL wins over everything else
            .set_override_option("database.url", database_url)?
            .build()?;

        s.try_deserialize()
    }
}
