//! Shared helpers for turning a [`Reply`] into Discord responses.
use crate::shopping::Reply;
use crate::ui::action_rows;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage};
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::model::id::ChannelId;
use serenity::prelude::Context;

/// Discord rejects message content longer than this many characters.
pub const MAX_CONTENT_CHARS: usize = 2000;
const TRUNCATION_MARK: &str = "\n…";

/// Cuts `text` so it fits in one Discord message, marking the cut.
pub fn fit_content(text: &str) -> String {
    if text.chars().count() <= MAX_CONTENT_CHARS {
        return text.to_string();
    }
    let keep = MAX_CONTENT_CHARS - TRUNCATION_MARK.chars().count();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(TRUNCATION_MARK);
    out
}

pub fn response_message(reply: &Reply) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(fit_content(&reply.text))
        .components(action_rows(reply.keyboard))
}

/// Answer a button press with a fresh message carrying the next keyboard; logs failure with a tag.
pub async fn respond_component(ctx: &Context, c: &ComponentInteraction, tag: &str, reply: &Reply) {
    let response = CreateInteractionResponse::Message(response_message(reply));
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::error!(target="ui.respond", cid=%c.data.custom_id, tag=%tag, error=?e, "create_response failed");
    }
}

pub async fn respond_command(ctx: &Context, c: &CommandInteraction, reply: &Reply) {
    let response = CreateInteractionResponse::Message(response_message(reply));
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::error!(target="ui.respond", command=%c.data.name, error=?e, "create_response failed");
    }
}

pub async fn send_reply(ctx: &Context, channel_id: ChannelId, reply: &Reply) {
    let builder = CreateMessage::new()
        .content(fit_content(&reply.text))
        .components(action_rows(reply.keyboard));
    if let Err(e) = channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(target="ui.send", channel_id=%channel_id, error=?e, "send_message failed");
    }
}
