//! API middleware components

pub mod account_auth;
pub mod logging;
pub mod metrics;

pub use account_auth::RequireAccount;
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
