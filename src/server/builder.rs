//! Server builder and run_server function

use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{GateError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn SessionStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an external session store instead of the in-memory one
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the application state
    pub fn build_state(self) -> Result<AppState> {
        let config = self
            .config
            .ok_or_else(|| GateError::Config("Configuration is required".to_string()))?;

        match self.store {
            Some(store) => AppState::new(config, store),
            None => AppState::in_memory(config),
        }
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        HttpServer::with_state(self.build_state()?)
    }
}

/// Load configuration from `path`, falling back to defaults when the file is missing
pub async fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(
            "Configuration file {} not found, using default config",
            path.display()
        );
        Config::default()
    };

    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting rbac-gate");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/login - Open a session");
    info!("   POST /api/logout - Close the session");
    info!("   GET  /api/me - Current user");
    info!("   POST /api/rbac - Permission probe");
    info!("   GET  /api/pages - Page index");
    info!("   PUT  /api/pages/{{index}} - Retitle a page");

    server.start().await
}
