//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the sweep service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// JSON-RPC endpoint settings.
    pub blockchain: BlockchainConfig,

    /// Sweep destination and display settings.
    pub sweep: SweepConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub bind_address: String,

    /// TCP port.
    pub port: u16,

    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 16 * 1024,
        }
    }
}

/// Blockchain integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain id, checked against the node at startup.
    pub chain_id: Option<u64>,

    /// Per-call RPC timeout in seconds. Unset means no timeout.
    pub rpc_timeout_secs: Option<u64>,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://cloudflare-eth.com".to_string(),
            chain_id: None,
            rpc_timeout_secs: None,
        }
    }
}

/// Sweep behaviour configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Default payout address when a request names none.
    pub destination_address: Option<String>,

    /// Block explorer base URL used to build transaction links.
    pub explorer_url: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            destination_address: None,
            explorer_url: "https://etherscan.io".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Human-readable or JSON lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.socket_address(), "0.0.0.0:3000");
        assert!(config.blockchain.rpc_timeout_secs.is_none());
        assert!(config.sweep.destination_address.is_none());
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.sweep.explorer_url, "https://etherscan.io");
    }
}
