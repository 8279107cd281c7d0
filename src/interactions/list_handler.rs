//! Handles every `list_*` button press.
use super::ids;
use super::util::respond_component;
use crate::AppState;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use tracing::instrument;

#[instrument(level="debug", skip(ctx, component, app_state), fields(user_id = component.user.id.get()))]
pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let cid = component.data.custom_id.as_str();
    let Some(token) = ids::token_for(cid) else {
        tracing::warn!(target = "ui.button", cid, "unknown list button");
        return;
    };
    let user_id = component.user.id.get();
    if let Some(reply) = app_state.assistant.on_button_press(user_id, token).await {
        respond_component(ctx, component, cid, &reply).await;
    }
}
