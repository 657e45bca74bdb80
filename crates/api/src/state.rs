use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Requests share nothing else: every handler works on its own rows.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trade_db::DbPool,
    /// Server configuration (JWT key, storage, timeouts).
    pub config: Arc<ServerConfig>,
    /// Destination for uploaded product images.
    pub images: Arc<ImageStore>,
}
