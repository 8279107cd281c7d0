//! Draws a [`Keyboard`] descriptor as Discord button rows.
use crate::constants::{BTN_ADD, BTN_CANCEL, BTN_EXIT_SHOPPING, BTN_REMOVE, BTN_SHOPPING_MODE};
use crate::interactions::ids;
use crate::shopping::Keyboard;
use crate::ui::buttons::Btn;
use serenity::builder::{CreateActionRow, CreateButton};

pub fn action_rows(keyboard: Keyboard) -> Vec<CreateActionRow> {
    keyboard
        .rows()
        .iter()
        .map(|row| CreateActionRow::Buttons(row.iter().filter_map(|l| button(l)).collect()))
        .collect()
}

fn button(label: &str) -> Option<CreateButton> {
    let id = ids::custom_id_for(label)?;
    Some(match label {
        BTN_ADD => Btn::success(id, label),
        BTN_REMOVE | BTN_CANCEL => Btn::danger(id, label),
        BTN_SHOPPING_MODE | BTN_EXIT_SHOPPING => Btn::primary(id, label),
        _ => Btn::secondary(id, label),
    })
}
