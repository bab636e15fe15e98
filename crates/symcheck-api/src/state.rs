use std::sync::Arc;

use symcheck_catalog::ConditionCatalog;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The catalog is never mutated after startup, so handlers read it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ConditionCatalog>,
}

impl AppState {
    pub fn new(catalog: ConditionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
