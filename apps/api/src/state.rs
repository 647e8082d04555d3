use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable remote generator. Default: `GroqClient`. Tests swap in a stub
    /// that always reports "unavailable" to exercise the fallback path.
    pub generator: Arc<dyn TextGenerator>,
}
