//! Centralized custom_id string constants for keyboard buttons.
//! A button press is translated back into its label, which the interpreter reads as an utterance.

use crate::constants::{
    BTN_ADD, BTN_CANCEL, BTN_EXIT_SHOPPING, BTN_HELP, BTN_LIST, BTN_REMOVE, BTN_SHOPPING_MODE,
};

pub const LIST_PREFIX: &str = "list_";

pub const LIST_VIEW: &str = "list_view";
pub const LIST_ADD: &str = "list_add";
pub const LIST_REMOVE: &str = "list_remove";
pub const LIST_SHOPPING_START: &str = "list_shopping_start";
pub const LIST_SHOPPING_EXIT: &str = "list_shopping_exit";
pub const LIST_HELP: &str = "list_help";
pub const LIST_CANCEL: &str = "list_cancel";

/// (custom_id, label) pairs for every keyboard button.
const BUTTONS: &[(&str, &str)] = &[
    (LIST_VIEW, BTN_LIST),
    (LIST_ADD, BTN_ADD),
    (LIST_REMOVE, BTN_REMOVE),
    (LIST_SHOPPING_START, BTN_SHOPPING_MODE),
    (LIST_SHOPPING_EXIT, BTN_EXIT_SHOPPING),
    (LIST_HELP, BTN_HELP),
    (LIST_CANCEL, BTN_CANCEL),
];

pub fn is_list_component(id: &str) -> bool {
    id.starts_with(LIST_PREFIX)
}

/// The label token a button stands for.
pub fn token_for(custom_id: &str) -> Option<&'static str> {
    BUTTONS
        .iter()
        .find(|(id, _)| *id == custom_id)
        .map(|(_, label)| *label)
}

pub fn custom_id_for(label: &str) -> Option<&'static str> {
    BUTTONS
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(id, _)| *id)
}
