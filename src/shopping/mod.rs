//! The shopping assistant core: utterance in, session mutation and reply out.
//! Nothing in here does I/O.

pub mod amount;
pub mod dispatch;
pub mod intent;
pub mod keyboard;
pub mod list;
pub mod session;

pub use dispatch::{Reply, handle_utterance, welcome};
pub use intent::{Intent, IntentError, resolve};
pub use keyboard::Keyboard;
pub use list::{Item, ListError, ShoppingList};
pub use session::{PendingAction, Session, SessionStore, SharedSession};

/// `text` with `prefix` removed, compared ASCII case-insensitively. Never splits a character.
pub(crate) fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
