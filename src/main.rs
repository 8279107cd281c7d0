use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopping_list_bot::AppState;
use shopping_list_bot::config::BotConfig;
use shopping_list_bot::handler::Handler;
use shopping_list_bot::services::{Assistant, DisabledSpeechToText, SpeechToText, WhisperClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopping_list_bot=info,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BotConfig::from_env().context("invalid bot configuration")?;

    let stt: Arc<dyn SpeechToText> = match &config.openai_api_key {
        Some(key) => Arc::new(
            WhisperClient::new(key.clone(), config.stt_model.clone(), config.stt_language.clone())
                .context("building speech-to-text client")?,
        ),
        None => {
            tracing::warn!(target = "startup", "OPENAI_API_KEY not set; voice messages will be rejected");
            Arc::new(DisabledSpeechToText)
        }
    };

    let handler = Handler {
        guild_id: config.guild_id.map(GuildId::new),
        shopping_channel_id: config.shopping_channel_id.map(ChannelId::new),
    };
    let token = config.discord_token.clone();
    let app_state = Arc::new(AppState::new(Assistant::new(stt)));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .context("creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    tracing::info!(target = "startup", "bot starting");
    client.start().await.context("Discord client error")?;
    Ok(())
}
