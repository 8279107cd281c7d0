//! `/start`: greets the user and shows the main keyboard.
use crate::AppState;
use crate::interactions::util::respond_command;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

pub const NAME: &str = "start";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Começa a usar o assistente de compras.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: &AppState) {
    let reply = app_state
        .assistant
        .on_start(interaction.user.id.get())
        .await;
    respond_command(ctx, interaction, &reply).await;
}
