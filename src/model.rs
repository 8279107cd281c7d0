//! Shared state stored in serenity's global `TypeMap`.

use crate::services::Assistant;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the client data so every event handler can reach it.
pub struct AppState {
    /// Session store plus the speech-to-text client.
    pub assistant: Assistant,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
