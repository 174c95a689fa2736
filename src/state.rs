//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

/// Carries the injected persistence layer; handlers never see a raw pool.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        AppState { store }
    }
}
