//! Closed set of keyboards a reply can carry. The transport decides how to draw them.

use crate::constants::{
    BTN_ADD, BTN_CANCEL, BTN_EXIT_SHOPPING, BTN_HELP, BTN_LIST, BTN_REMOVE, BTN_SHOPPING_MODE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyboard {
    Normal,
    ShoppingMode,
    AwaitingCancel,
}

impl Keyboard {
    /// Button labels, row by row.
    pub fn rows(self) -> &'static [&'static [&'static str]] {
        match self {
            Keyboard::Normal => &[
                &[BTN_ADD, BTN_REMOVE],
                &[BTN_LIST, BTN_SHOPPING_MODE],
                &[BTN_HELP],
            ],
            Keyboard::ShoppingMode => &[&[BTN_LIST], &[BTN_EXIT_SHOPPING, BTN_HELP]],
            Keyboard::AwaitingCancel => &[&[BTN_CANCEL]],
        }
    }

    pub fn for_mode(shopping_mode: bool) -> Self {
        if shopping_mode {
            Keyboard::ShoppingMode
        } else {
            Keyboard::Normal
        }
    }
}
