use std::sync::Arc;

use dwarf_core::UrlStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
    /// Public origin short codes are appended to.
    pub base_url: String,
    /// Where unknown codes (and the bare root) redirect to.
    pub not_found_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UrlStore>,
        base_url: impl Into<String>,
        not_found_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            base_url: base_url.into(),
            not_found_url: not_found_url.into(),
        }
    }
}
