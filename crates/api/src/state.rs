use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The connection pool is the only shared resource; requests hold no other
/// state across calls.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: revtox_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
