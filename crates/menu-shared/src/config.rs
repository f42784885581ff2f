//! Configuration management

use std::collections::HashMap;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_MENU_NAME, DEFAULT_ROUTES};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub menu: MenuSettings,
    /// Named routes: route name -> concrete path.
    #[serde(default)]
    pub routes: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub log_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// Menu drawn when a request does not name one.
    pub default_menu: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    /// Deserializes and checks a built configuration.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.menu.default_menu.trim().is_empty() {
            return Err(AppError::InvalidConfig("menu.default_menu must not be empty".into()));
        }
        if let Some((name, _)) = self.routes.iter().find(|(_, path)| !path.starts_with('/')) {
            return Err(AppError::InvalidConfig(format!(
                "route '{}' must map to an absolute path",
                name
            )));
        }
        Ok(())
    }

    /// Builder pre-populated with every default; callers add their sources on top.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "menu-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("menu.default_menu", DEFAULT_MENU_NAME)?;

        for (name, path) in DEFAULT_ROUTES {
            builder = builder.set_default(format!("routes.{}", name), *path)?;
        }

        Ok(builder)
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}
