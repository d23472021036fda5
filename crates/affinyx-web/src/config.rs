//! Server configuration from the environment.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PREDICTION_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Hard upper bound on a single prediction run.
    pub prediction_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            prediction_timeout: Duration::from_secs(DEFAULT_PREDICTION_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `AFFINYX_*` environment variables, falling
    /// back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("AFFINYX_HOST").unwrap_or(defaults.host);
        let port = std::env::var("AFFINYX_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let prediction_timeout = std::env::var("AFFINYX_PREDICTION_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.prediction_timeout);

        Self {
            host,
            port,
            prediction_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.prediction_timeout, Duration::from_secs(30));
    }
}
