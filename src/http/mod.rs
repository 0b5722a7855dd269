//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/ (request ID, logging, CORS, body limit)
//!     → handlers.rs (GET /health, POST /api/sweep/eth)
//!     → response.rs (SweepError → status + JSON body)
//! ```

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
