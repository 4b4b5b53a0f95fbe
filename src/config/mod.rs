//! Configuration management for the gate
//!
//! This module handles loading, validation, and environment overrides of the
//! gate configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Users and session cookie settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Grant table and protected resources
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GateError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the default configuration with environment overrides applied
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GATE_*` environment variables on top of this configuration
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(host) = env::var("GATE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("GATE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| GateError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("GATE_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GateError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Ok(cookie_name) = env::var("GATE_COOKIE_NAME") {
            self.auth.cookie_name = cookie_name;
        }
        if let Ok(secure) = env::var("GATE_COOKIE_SECURE") {
            self.auth.cookie_secure = secure
                .parse()
                .map_err(|e| GateError::Config(format!("Invalid cookie secure flag: {}", e)))?;
        }
        if let Ok(level) = env::var("GATE_LOG_LEVEL") {
            self.logging.level = level;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GateError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| GateError::Config(format!("Auth config error: {}", e)))?;

        self.rbac
            .validate()
            .map_err(|e| GateError::Config(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| GateError::Config(format!("Logging config error: {}", e)))?;

        let known: Vec<&str> = self.auth.users.iter().map(|u| u.username.as_str()).collect();
        if let Some(page) = self
            .rbac
            .pages
            .iter()
            .find(|p| !known.contains(&p.owner.as_str()))
        {
            return Err(GateError::Config(format!(
                "Page '{}' is owned by unknown user '{}'",
                page.title, page.owner
            )));
        }

        models::auth::warn_insecure_config(&self.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
