//! ETH treasury sweep service library.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod sweep;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use sweep::SweepService;
