//! Shared application state.

use std::sync::Arc;

use fretline_chat::CompletionProvider;

/// Immutable state handed to every route handler.
///
/// Built once at startup; handlers never mutate it.
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
