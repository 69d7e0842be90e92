//! Application state shared across handlers

use std::sync::Arc;

use crate::db::TriviaStore;

/// Shared application state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn TriviaStore {
        self.inner.store.as_ref()
    }

    /// Release store resources. Call after the server has stopped serving.
    pub async fn shutdown(&self) {
        self.inner.store.close().await;
    }
}
