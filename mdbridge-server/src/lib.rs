//! mdbridge server library.
//!
//! Exposes the router, state, and config so integration tests can drive the
//! server in-process.

pub mod config;
pub mod http;
pub mod state;

pub use config::BridgeConfig;
pub use http::create_router;
pub use state::AppState;
