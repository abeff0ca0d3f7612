//! Application state shared across handlers

use std::sync::Arc;

use crate::repositories::ProductRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub product_repository: Arc<dyn ProductRepository>,
}
