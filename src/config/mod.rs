//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (immutable for the process lifetime)
//! ```
//!
//! The treasury private key is not part of the schema; it is read straight
//! from the environment by `blockchain::wallet`.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BlockchainConfig, LogFormat, ObservabilityConfig, ServerConfig, ServiceConfig, SweepConfig};
