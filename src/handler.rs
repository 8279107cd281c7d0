use crate::interactions::util::send_reply;
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::channel::{Attachment, Message};
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

enum SlashCommand {
    Start,
    Help,
    Shopping,
}

impl FromStr for SlashCommand {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            commands::start::NAME => Ok(SlashCommand::Start),
            commands::help::NAME | "help" => Ok(SlashCommand::Help),
            commands::shopping::NAME => Ok(SlashCommand::Shopping),
            _ => Err(()),
        }
    }
}

/// Audio attachments (voice notes included) are transcribed instead of read as text.
pub fn is_audio_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|t| t.starts_with("audio/"))
}

fn audio_attachment(msg: &Message) -> Option<&Attachment> {
    msg.attachments
        .iter()
        .find(|a| is_audio_content_type(a.content_type.as_deref()))
}

pub struct Handler {
    /// Slash commands go to this guild when set, globally otherwise.
    pub guild_id: Option<GuildId>,
    /// Guild channel read as utterances; direct messages are always read.
    pub shopping_channel_id: Option<ChannelId>,
}

impl Handler {
    fn listens_to(&self, msg: &Message) -> bool {
        msg.guild_id.is_none() || Some(msg.channel_id) == self.shopping_channel_id
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::warn!(target = "handler", "missing_app_state");
            return;
        };
        if let Interaction::Command(command) = &interaction {
            match SlashCommand::from_str(&command.data.name) {
                Ok(SlashCommand::Start) => {
                    commands::start::run_slash(&ctx, command, &app_state).await
                }
                Ok(SlashCommand::Help) => {
                    commands::help::run_slash(&ctx, command, &app_state).await
                }
                Ok(SlashCommand::Shopping) => {
                    commands::shopping::run_slash(&ctx, command, &app_state).await
                }
                Err(()) => {
                    tracing::debug!(target = "handler", name = %command.data.name, "unknown slash command")
                }
            }
        } else if let Interaction::Component(component) = &interaction
            && interactions::ids::is_list_component(&component.data.custom_id)
        {
            interactions::list_handler::handle(&ctx, component, app_state).await;
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || !self.listens_to(&msg) {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            tracing::warn!(target = "handler", "missing_app_state");
            return;
        };
        let assistant = &app_state.assistant;
        let user_id = msg.author.id.get();

        let reply = if let Some(audio) = audio_attachment(&msg) {
            match audio.download().await {
                Ok(bytes) => assistant.on_voice(user_id, bytes, &audio.filename).await,
                Err(e) => {
                    tracing::error!(target = "handler", user_id, error = ?e, "audio download failed");
                    Some(assistant.voice_failed(user_id).await)
                }
            }
        } else {
            assistant.on_utterance(user_id, &msg.content).await
        };

        if let Some(reply) = reply {
            send_reply(&ctx, msg.channel_id, &reply).await;
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target = "handler", user = %ready.user.name, "connected and ready");
        let result = match self.guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands::all_commands())
                .await
                .map(|_| ()),
            None => Command::set_global_commands(&ctx.http, commands::all_commands())
                .await
                .map(|_| ()),
        };
        match result {
            Ok(()) => tracing::info!(target = "handler", guild = ?self.guild_id, "registered slash commands"),
            Err(e) => tracing::error!(target = "handler", error = ?e, "registering slash commands failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_audio_content_types_are_transcribed() {
        assert!(is_audio_content_type(Some("audio/ogg")));
        assert!(is_audio_content_type(Some("audio/mpeg")));
        assert!(!is_audio_content_type(Some("image/png")));
        assert!(!is_audio_content_type(None));
    }

    #[test]
    fn slash_names_route() {
        assert!(matches!(SlashCommand::from_str("start"), Ok(SlashCommand::Start)));
        assert!(matches!(SlashCommand::from_str("ajuda"), Ok(SlashCommand::Help)));
        assert!(matches!(SlashCommand::from_str("compras"), Ok(SlashCommand::Shopping)));
        assert!(SlashCommand::from_str("ping").is_err());
    }
}
