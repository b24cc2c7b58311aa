use crate::error::{NewsError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound for a form submission, image included
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub model_path: String,
    pub vectorizer_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_max_upload_size() -> usize {
    10 * 1024 * 1024
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NewsError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| NewsError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.listen_addr.parse::<SocketAddr>().map_err(|e| {
            NewsError::Config(format!(
                "Invalid listen address '{}': {}",
                self.server.listen_addr, e
            ))
        })?;

        if self.server.max_upload_size == 0 {
            return Err(NewsError::Config(
                "max_upload_size must be greater than zero".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(NewsError::Config(format!(
                "Unknown log format '{}' (expected pretty or json)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8501".to_string(),
                max_upload_size: default_max_upload_size(),
            },
            model: ModelConfig {
                model_path: "model.json".to_string(),
                vectorizer_path: "vectorizer.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
