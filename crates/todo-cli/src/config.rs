use crate::timezone::detect_system_timezone;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Settings read from `config.toml`, overridden by `TODO_*` environment variables.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// IANA zone deciding which calendar day counts as "today"
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    /// Insert the stock categories, priorities and statuses at start-up
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
    /// Used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// User assumed by commands that take `--user` when the flag is omitted
    #[serde(default)]
    pub default_user: Option<String>,
}

fn default_database_path() -> String {
    "todo.db".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TODO_"))
            .extract()
    }
}
