//! Handles settings for the application.
//!
//! Sources, lowest precedence first:
//!
//! - `settings.toml` in the working directory (optional)
//! - `EXPENSES__<SECTION>__<KEY>` environment variables
//! - `DATABASE_URL`, which overrides `server.database_url`
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// Connection string of the store, e.g. `sqlite:./expenses.db?mode=rwc`.
    pub database_url: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name("settings").required(false),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn from_sources<S>(file: S, database_url: Option<String>) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .add_source(file)
            .add_source(Environment::with_prefix("EXPENSES").separator("__"))
            .set_override_option("server.database_url", database_url)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn toml(source: &'static str) -> File<config::FileSourceString, FileFormat> {
        File::from_str(source, FileFormat::Toml)
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let settings = Settings::from_sources(
            toml("[server]\ndatabase_url = \"sqlite::memory:\""),
            None,
        )
        .unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.bind, None);
        assert_eq!(settings.server.database_url, "sqlite::memory:");
    }

    #[test]
    fn database_url_override_wins() {
        let settings = Settings::from_sources(
            toml("[server]\nport = 8080\ndatabase_url = \"sqlite::memory:\""),
            Some("sqlite:./other.db?mode=rwc".to_string()),
        )
        .unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.database_url, "sqlite:./other.db?mode=rwc");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(Settings::from_sources(toml("[app]\nlevel = \"debug\""), None).is_err());
    }
}
