// src/commands/mod.rs
// Slash commands. Everything else arrives as plain messages or button presses.

pub mod help;
pub mod shopping;
pub mod start;

use serenity::builder::CreateCommand;

pub fn all_commands() -> Vec<CreateCommand> {
    vec![start::register(), help::register(), shopping::register()]
}

pub fn all_command_names() -> Vec<&'static str> {
    vec![start::NAME, help::NAME, shopping::NAME]
}
