//! Connection settings for the HTTP gateway.
//!
//! Defaults come from the environment:
//! - `ORIENTDB_ENDPOINT`: server endpoint (default: "http://localhost:2480")
//! - `ORIENTDB_DATABASE`: database name (default: "orient")
//! - `ORIENTDB_USER`: user name (default: "root")
//! - `ORIENTDB_PASSWORD`: password (default: empty)
//! - `ORIENTDB_TIMEOUT_SECS`: request timeout (default: 30)

use serde::{Deserialize, Serialize};

use super::GatewayError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GatewayConfig {
    /// Server endpoint, without a trailing slash
    pub endpoint: String,
    /// Database to run commands against
    pub database: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("ORIENTDB_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:2480".to_string()),
            database: std::env::var("ORIENTDB_DATABASE").unwrap_or_else(|_| "orient".to_string()),
            username: std::env::var("ORIENTDB_USER").unwrap_or_else(|_| "root".to_string()),
            password: std::env::var("ORIENTDB_PASSWORD").unwrap_or_default(),
            timeout_secs: std::env::var("ORIENTDB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl GatewayConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.endpoint.trim().is_empty() {
            return Err(GatewayError::Config("endpoint cannot be empty".to_string()));
        }
        if self.database.trim().is_empty() {
            return Err(GatewayError::Config("database cannot be empty".to_string()));
        }
        if self.username.trim().is_empty() {
            return Err(GatewayError::Config("username cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(GatewayError::Config("timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    /// URL of the SQL command endpoint.
    pub fn command_url(&self) -> String {
        format!(
            "{}/command/{}/sql",
            self.endpoint.trim_end_matches('/'),
            self.database
        )
    }
}
