use crate::timezone::detect_system_timezone;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Settings read from `twodo.toml` and `TWODO_*` environment variables,
/// the latter taking precedence.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// IANA timezone that partial times are resolved and displayed in
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    /// `chrono` format for start/stop times in listings
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

fn default_database_path() -> String {
    "2do.db".to_string()
}

fn default_display_format() -> String {
    "%b%d %H%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            timezone: detect_system_timezone(),
            display_format: default_display_format(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("twodo.toml"))
            .merge(Env::prefixed("TWODO_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config.database_path, "2do.db");
            assert_eq!(config.display_format, "%b%d %H%M");
            assert!(!config.timezone.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "twodo.toml",
                r#"
                database_path = "/tmp/from-file.db"
                timezone = "Europe/Oslo"
                "#,
            )?;
            jail.set_env("TWODO_DATABASE_PATH", "/tmp/from-env.db");

            let config = Config::new()?;
            assert_eq!(config.database_path, "/tmp/from-env.db");
            assert_eq!(config.timezone, "Europe/Oslo");
            Ok(())
        });
    }
}
