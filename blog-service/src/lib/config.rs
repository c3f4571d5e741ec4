use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Documented development-only signing secret. Applied only when
/// `RUN_MODE=development` and no secret is configured; any other mode treats
/// an unset secret as a fatal configuration error.
const DEV_JWT_SECRET: &str = "dev-only-blog-service-secret";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_smtp_from")]
    pub from: String,
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: default_expiration_hours(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: default_smtp_from(),
            admin_email: default_admin_email(),
        }
    }
}

fn default_http_port() -> u16 {
    8080
}

fn default_expiration_hours() -> i64 {
    24
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    // Default local Mailhog/Mailtrap port.
    1025
}

fn default_smtp_from() -> String {
    "noreply@example.com".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let mut config: Config = configuration.try_deserialize()?;
        config.jwt.secret = resolve_jwt_secret(&run_mode, config.jwt.secret)?;

        Ok(config)
    }
}

fn resolve_jwt_secret(run_mode: &str, secret: String) -> Result<String, ConfigError> {
    if !secret.is_empty() {
        return Ok(secret);
    }

    if run_mode == "development" {
        tracing::warn!("jwt.secret is not set, falling back to the development default");
        return Ok(DEV_JWT_SECRET.to_string());
    }

    Err(ConfigError::Message(
        "jwt.secret must be set outside development mode".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_secret_is_kept() {
        let secret = resolve_jwt_secret("production", "configured-secret".to_string())
            .expect("configured secret should be accepted");
        assert_eq!(secret, "configured-secret");
    }

    #[test]
    fn missing_secret_is_fatal_outside_development() {
        let result = resolve_jwt_secret("production", String::new());
        assert!(result.is_err());
    }

    #[test]
    fn development_mode_falls_back_to_documented_default() {
        let secret = resolve_jwt_secret("development", String::new())
            .expect("development mode should fall back");
        assert_eq!(secret, DEV_JWT_SECRET);
    }
}
