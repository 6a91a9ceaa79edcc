use std::sync::Arc;

use crate::db::store::QrStore;

/// Shared, read-only context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QrStore>,
    pub base_url: String, // Public origin used to build redirect URLs
}

impl AppState {
    pub fn new(store: Arc<dyn QrStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }

    pub fn redirect_url(&self, id: &str) -> String {
        format!("{}/r/{}", self.base_url, id)
    }
}
