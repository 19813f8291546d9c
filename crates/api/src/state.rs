use std::sync::Arc;

use motocompare_store::MotorcycleStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The motorcycle catalog.
    pub store: Arc<MotorcycleStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
