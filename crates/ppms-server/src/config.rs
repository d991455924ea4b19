//! Server configuration.
//!
//! Every setting can come from a command-line flag or an environment
//! variable:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PPMS_SERVER_PORT` | 8080 | Server port |
//! | `PPMS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `PPMS_LOG_LEVEL` | info | Log level |
//! | `PPMS_DATABASE_URL` | ppms.db | SQLite file, or `:memory:` |

use clap::Parser;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Server configuration for the patient records API.
#[derive(Debug, Clone, Parser)]
#[command(name = "ppms")]
#[command(about = "Patient records HTTP API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PPMS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "PPMS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PPMS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// SQLite database path, or `:memory:` for a throwaway database.
    #[arg(long, env = "PPMS_DATABASE_URL", default_value = "ppms.db")]
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            database_url: "ppms.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Configuration for tests: in-memory database.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            database_url: ":memory:".to_string(),
            ..Default::default()
        }
    }

    /// Returns `host:port` for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the database lives only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.database_url == ":memory:"
    }

    /// Validates the configuration, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("port must be greater than 0".to_string());
        }
        if self.host.trim().is_empty() {
            errors.push("host must not be empty".to_string());
        }
        if self.database_url.trim().is_empty() {
            errors.push("database url must not be empty".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
