//! `/ajuda`: how to use the list, by buttons, text or voice.
use crate::AppState;
use crate::interactions::util::respond_command;
use crate::shopping::Intent;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

pub const NAME: &str = "ajuda";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Mostra como usar a lista de compras.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: &AppState) {
    let reply = app_state
        .assistant
        .on_command(interaction.user.id.get(), Intent::ShowHelp)
        .await;
    respond_command(ctx, interaction, &reply).await;
}
