use std::sync::Arc;

use crate::ai::ProviderChain;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analysis pipeline itself is stateless; only the provider
/// chain lives here.
#[derive(Clone)]
pub struct AppState {
    /// AI backends in fallback priority order (Gemini → Groq → OpenAI).
    /// May be empty, in which case analysis degrades to local keywords.
    pub providers: Arc<ProviderChain>,
}
