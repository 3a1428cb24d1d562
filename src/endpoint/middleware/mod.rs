//! Ready-made endpoint middlewares.
//!
//! - [`RequireUser`] - authentication guard, the usual auth middleware
//! - [`ErrorLogging`] - logs service errors tagged with component and endpoint
//! - [`RateLimit`] - shared token bucket (`governor`)
//! - [`Metrics`] - request/error counters and latency histogram (`metrics`)

pub mod error_logging;
pub mod metrics;
pub mod rate_limit;
pub mod require_user;

pub use error_logging::ErrorLogging;
pub use metrics::Metrics;
pub use rate_limit::RateLimit;
pub use require_user::RequireUser;
