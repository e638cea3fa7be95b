//! Shared application state for all routes.

use crate::store::TutorialStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TutorialStore>,
}

impl AppState {
    pub fn new(store: impl TutorialStore) -> Self {
        AppState { store: Arc::new(store) }
    }
}
