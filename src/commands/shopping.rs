//! `/compras`: switches the user into shopping mode.
use crate::AppState;
use crate::interactions::util::respond_command;
use crate::shopping::Intent;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

pub const NAME: &str = "compras";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Ativa o modo compras (marque itens com o preço).")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, app_state: &AppState) {
    let reply = app_state
        .assistant
        .on_command(interaction.user.id.get(), Intent::EnterShoppingMode)
        .await;
    respond_command(ctx, interaction, &reply).await;
}
