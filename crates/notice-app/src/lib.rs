//! # notice-app
//!
//! Wires configuration, the PostgreSQL member store, and the member service together.

pub mod server;
pub mod state;

pub use server::{build_service_context, create_app_state, run};
pub use state::AppState;
