use std::sync::Arc;

use crate::database::store::PlaceStore;

/// Shared application state handed to every handler.
///
/// The store is the only cross-request resource; handlers receive the
/// authenticated identity separately as a request extension.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlaceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self { store }
    }
}
