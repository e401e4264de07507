use std::sync::Arc;

use crate::seo::store::SeoStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable for the life of the process; handlers only read from it.
    pub store: Arc<SeoStore>,
}
