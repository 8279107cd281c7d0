//! Applies a resolved [`Intent`] to a [`Session`] and builds the reply.

use super::intent::{Intent, resolve};
use super::keyboard::Keyboard;
use super::session::{PendingAction, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }
}

pub const HELP_TEXT: &str = "💡 **Como usar:**\n\n\
    1. Clique em '➕ Adicionar' e digite o nome.\n\
    2. Ou fale: _'Adicionar café'_\n\
    3. No mercado, clique em '🛒 Iniciar Compras'.\n\
    4. Vá falando: _'Peguei leite por 5 reais'_";

pub const WELCOME_TEXT: &str = "👋 **Olá! Eu sou seu assistente de compras.**\n\n\
    Toque em **Adicionar** e digite o nome do produto, ou mande um áudio!";

const SHOPPING_ON_TEXT: &str = "🛒 **Modo Compras Ativado**\n\n\
    Vá enviando áudios ou textos conforme pega os produtos:\n\
    Ex: _'Peguei sabão 15,90'_";
const SHOPPING_OFF_TEXT: &str = "🏠 Você saiu do modo compras.";
const CANCELLED_TEXT: &str = "Ação cancelada.";
const ASK_ADD_TEXT: &str = "✍️ **Digite o nome do item** para adicionar (ou fale por áudio):";
const ASK_REMOVE_TEXT: &str = "🗑️ **Digite o nome do item** para remover:";
const UNRECOGNIZED_TEXT: &str = "🤔 Não entendi.\nUse os botões ou diga 'adicionar [item]'.";

/// Greeting for `/start`; always shows the main menu.
pub fn welcome() -> Reply {
    Reply::new(WELCOME_TEXT, Keyboard::Normal)
}

/// Runs one utterance through the interpreter. Blank utterances get no reply.
pub fn handle_utterance(session: &mut Session, utterance: &str) -> Option<Reply> {
    if utterance.trim().is_empty() {
        return None;
    }
    let reply = match resolve(utterance, session) {
        Ok(intent) => apply(session, intent),
        Err(e) => Reply::new(e.to_string(), session.mode_keyboard()),
    };
    Some(reply)
}

/// Applies `intent`, mutating the session. Every failure becomes guidance text.
pub fn apply(session: &mut Session, intent: Intent) -> Reply {
    tracing::debug!(target = "shopping", ?intent, "applying intent");
    match intent {
        Intent::CancelPending => {
            session.pending_action = None;
            Reply::new(CANCELLED_TEXT, Keyboard::Normal)
        }
        Intent::ShowList => {
            session.pending_action = None;
            Reply::new(session.items.render(), session.mode_keyboard())
        }
        Intent::ShowHelp => {
            session.pending_action = None;
            Reply::new(HELP_TEXT, session.mode_keyboard())
        }
        Intent::EnterShoppingMode => {
            session.shopping_mode = true;
            session.pending_action = None;
            Reply::new(SHOPPING_ON_TEXT, Keyboard::ShoppingMode)
        }
        Intent::ExitShoppingMode => {
            session.shopping_mode = false;
            session.pending_action = None;
            Reply::new(SHOPPING_OFF_TEXT, Keyboard::Normal)
        }
        Intent::BeginAdd => {
            session.pending_action = Some(PendingAction::Adding);
            Reply::new(ASK_ADD_TEXT, Keyboard::AwaitingCancel)
        }
        Intent::BeginRemove => {
            session.pending_action = Some(PendingAction::Removing);
            Reply::new(ASK_REMOVE_TEXT, Keyboard::AwaitingCancel)
        }
        // The pending action is spent even when the list operation fails.
        Intent::CompleteAdd(name) => {
            session.pending_action = None;
            let text = flatten(session.items.add(&name));
            Reply::new(text, session.mode_keyboard())
        }
        Intent::CompleteRemove(name) => {
            session.pending_action = None;
            let text = flatten(session.items.remove(&name));
            Reply::new(text, session.mode_keyboard())
        }
        Intent::AddDirect(name) => {
            let text = flatten(session.items.add(&name));
            Reply::new(text, session.mode_keyboard())
        }
        Intent::RemoveDirect(name) => {
            let text = flatten(session.items.remove(&name));
            Reply::new(text, session.mode_keyboard())
        }
        Intent::MarkPurchased(utterance) => {
            let text = flatten(session.items.mark_purchased(&utterance));
            Reply::new(text, Keyboard::ShoppingMode)
        }
        Intent::Unrecognized => Reply::new(UNRECOGNIZED_TEXT, session.mode_keyboard()),
    }
}

fn flatten<E: std::fmt::Display>(result: Result<String, E>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_utterance_is_ignored() {
        let mut s = Session::new();
        assert_eq!(handle_utterance(&mut s, "   "), None);
    }

    #[test]
    fn failed_pending_add_still_clears_pending() {
        let mut s = Session::new();
        s.items.add("leite").unwrap();
        handle_utterance(&mut s, crate::constants::BTN_ADD);
        let reply = handle_utterance(&mut s, "Leite").unwrap();
        assert_eq!(reply.text, "❌ 'Leite' já está na lista.");
        assert_eq!(s.pending_action, None);
    }

    #[test]
    fn empty_argument_becomes_guidance() {
        let mut s = Session::new();
        let reply = handle_utterance(&mut s, "adicionar").unwrap();
        assert!(reply.text.contains("Faltou o nome do item"));
        assert!(s.items.is_empty());
    }

    #[test]
    fn huge_prices_are_guidance_not_a_crash() {
        let mut s = Session::new();
        s.shopping_mode = true;
        for input in [
            "peguei arroz 79228162514264337593543950335",
            "peguei feijao 79228162514264337593543950335",
        ] {
            let reply = handle_utterance(&mut s, input).unwrap();
            assert_eq!(reply.text, "⚠️ Erro ao entender o valor numérico.");
        }
        let reply = handle_utterance(&mut s, crate::constants::BTN_LIST).unwrap();
        assert_eq!(reply.text, crate::shopping::list::EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn replies_follow_mode_keyboard() {
        let mut s = Session::new();
        s.shopping_mode = true;
        let reply = handle_utterance(&mut s, "adicionar arroz").unwrap();
        assert_eq!(reply.keyboard, Keyboard::ShoppingMode);
        let reply = handle_utterance(&mut s, "blá blá").unwrap();
        assert_eq!(reply.keyboard, Keyboard::ShoppingMode);
    }
}
