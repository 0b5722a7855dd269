//! Configuration validation.
//!
//! Semantic checks only; serde already handled syntax. All problems are
//! collected so an operator sees every mistake in one run.

use crate::blockchain::types::parse_address;
use crate::config::schema::ServiceConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.port == 0 {
        errors.push(ValidationError::new("server.port", "must be non-zero"));
    }

    if config.server.max_body_bytes == 0 {
        errors.push(ValidationError::new("server.max_body_bytes", "must be non-zero"));
    }

    match url::Url::parse(&config.blockchain.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "blockchain.rpc_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "blockchain.rpc_url",
            format!("invalid URL '{}': {}", config.blockchain.rpc_url, e),
        )),
    }

    if config.blockchain.rpc_timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "blockchain.rpc_timeout_secs",
            "must be non-zero when set",
        ));
    }

    if let Some(dest) = &config.sweep.destination_address {
        if parse_address(dest).is_none() {
            errors.push(ValidationError::new(
                "sweep.destination_address",
                format!("'{}' is not a valid address", dest),
            ));
        }
    }

    if let Err(e) = url::Url::parse(&config.sweep.explorer_url) {
        errors.push(ValidationError::new(
            "sweep.explorer_url",
            format!("invalid URL '{}': {}", config.sweep.explorer_url, e),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;
        config.blockchain.rpc_url = "ftp://node.example".to_string();
        config.sweep.destination_address = Some("0xnope".to_string());

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["server.port", "blockchain.rpc_url", "sweep.destination_address"]
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ServiceConfig::default();
        config.blockchain.rpc_timeout_secs = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "blockchain.rpc_timeout_secs");
    }

    #[test]
    fn test_websocket_rpc_url_rejected() {
        for url in ["ws://127.0.0.1:8546", "wss://mainnet.example/ws"] {
            let mut config = ServiceConfig::default();
            config.blockchain.rpc_url = url.to_string();
            let errors = validate_config(&config).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "blockchain.rpc_url");
            assert!(errors[0].message.contains("unsupported scheme"));
        }
    }

    #[test]
    fn test_valid_destination_accepted() {
        let mut config = ServiceConfig::default();
        config.sweep.destination_address =
            Some("0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
