//! Treasury sweep subsystem.
//!
//! # Data Flow
//! ```text
//! SweepRequest
//!     → service.rs (destination, treasury check, chain reads)
//!     → calculator.rs (balance - gas_price * 21000)
//!     → service.rs (sign + broadcast when sweepable)
//!     → SweepOutcome | SweepError
//! ```

pub mod calculator;
pub mod service;
pub mod types;

pub use calculator::{calculate_sweep, SweepDecision, SweepQuote};
pub use service::SweepService;
pub use types::{SweepError, SweepOutcome, SweepRequest};
