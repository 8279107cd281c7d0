//! Turns an utterance into an [`Intent`].
//!
//! Resolution walks [`RULES`] top to bottom and the first rule that fires wins. Button tokens
//! come first because a label could otherwise trip a keyword rule; a pending add/remove outranks
//! free text; purchase verbs are checked before add/remove verbs so "peguei leite 4,50" keeps its
//! price. Reordering the table changes behavior, and `rule_order_is_fixed` pins it down.
//!
//! The resolver only reads the session. Clearing or setting `pending_action` is done by
//! [`super::dispatch`] when the intent is applied.

use super::session::{PendingAction, Session};
use super::strip_prefix_ci;
use crate::constants::{
    ADD_VERBS, BTN_ADD, BTN_CANCEL, BTN_EXIT_SHOPPING, BTN_HELP, BTN_LIST, BTN_REMOVE,
    BTN_SHOPPING_MODE, LIST_KEYWORDS, MENU_TOKENS, PURCHASE_VERBS, REMOVE_VERBS,
    START_SHOPPING_PHRASES,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CancelPending,
    ShowList,
    ShowHelp,
    EnterShoppingMode,
    ExitShoppingMode,
    BeginAdd,
    BeginRemove,
    CompleteAdd(String),
    CompleteRemove(String),
    MarkPurchased(String),
    AddDirect(String),
    RemoveDirect(String),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("⚠️ Faltou o nome do item. Tente: '{verb} leite'")]
    EmptyArgument { verb: String },
}

/// The pieces of session state the rules may look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveContext {
    pub shopping_mode: bool,
    pub pending_action: Option<PendingAction>,
}

impl From<&Session> for ResolveContext {
    fn from(session: &Session) -> Self {
        Self {
            shopping_mode: session.shopping_mode,
            pending_action: session.pending_action,
        }
    }
}

pub struct Utterance<'a> {
    /// Trimmed, original casing.
    pub text: &'a str,
    pub lower: String,
}

impl<'a> Utterance<'a> {
    pub fn new(raw: &'a str) -> Self {
        let text = raw.trim();
        Self {
            text,
            lower: text.to_lowercase(),
        }
    }
}

pub type RuleOutcome = Option<Result<Intent, IntentError>>;

pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&Utterance<'_>, &ResolveContext) -> RuleOutcome,
}

pub static RULES: &[Rule] = &[
    Rule { name: "cancel_button", apply: cancel_button },
    Rule { name: "list_button", apply: list_button },
    Rule { name: "help_button", apply: help_button },
    Rule { name: "shopping_button", apply: shopping_button },
    Rule { name: "exit_shopping_button", apply: exit_shopping_button },
    Rule { name: "add_button", apply: add_button },
    Rule { name: "remove_button", apply: remove_button },
    Rule { name: "pending_action", apply: pending_action },
    Rule { name: "start_shopping_phrase", apply: start_shopping_phrase },
    Rule { name: "purchase_verb", apply: purchase_verb },
    Rule { name: "add_verb", apply: add_verb },
    Rule { name: "remove_verb", apply: remove_verb },
    Rule { name: "list_keyword", apply: list_keyword },
    Rule { name: "fallback", apply: fallback },
];

pub fn resolve(utterance: &str, session: &Session) -> Result<Intent, IntentError> {
    resolve_with(&Utterance::new(utterance), &ResolveContext::from(session))
}

pub fn resolve_with(u: &Utterance<'_>, ctx: &ResolveContext) -> Result<Intent, IntentError> {
    for rule in RULES {
        if let Some(outcome) = (rule.apply)(u, ctx) {
            tracing::debug!(
                target = "intent",
                rule = rule.name,
                ok = outcome.is_ok(),
                "utterance resolved"
            );
            return outcome;
        }
    }
    Ok(Intent::Unrecognized)
}

fn exact(u: &Utterance<'_>, token: &str, intent: Intent) -> RuleOutcome {
    (u.text == token).then_some(Ok(intent))
}

fn cancel_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_CANCEL, Intent::CancelPending)
}

fn list_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_LIST, Intent::ShowList)
}

fn help_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_HELP, Intent::ShowHelp)
}

fn shopping_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_SHOPPING_MODE, Intent::EnterShoppingMode)
}

fn exit_shopping_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_EXIT_SHOPPING, Intent::ExitShoppingMode)
}

fn add_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_ADD, Intent::BeginAdd)
}

fn remove_button(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    exact(u, BTN_REMOVE, Intent::BeginRemove)
}

/// The whole utterance is the awaited item name, unless it is a menu button pressed by mistake,
/// in which case the pending action is dropped and the button is read as a fresh command.
fn pending_action(u: &Utterance<'_>, ctx: &ResolveContext) -> RuleOutcome {
    let pending = ctx.pending_action?;
    if MENU_TOKENS.iter().any(|t| *t == u.text) {
        let fresh = ResolveContext {
            pending_action: None,
            ..*ctx
        };
        return Some(resolve_with(u, &fresh));
    }
    let name = u.text.to_string();
    Some(Ok(match pending {
        PendingAction::Adding => Intent::CompleteAdd(name),
        PendingAction::Removing => Intent::CompleteRemove(name),
    }))
}

fn start_shopping_phrase(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    START_SHOPPING_PHRASES
        .iter()
        .any(|p| u.lower.contains(p))
        .then_some(Ok(Intent::EnterShoppingMode))
}

fn purchase_verb(u: &Utterance<'_>, ctx: &ResolveContext) -> RuleOutcome {
    if !ctx.shopping_mode {
        return None;
    }
    PURCHASE_VERBS
        .iter()
        .any(|v| strip_prefix_ci(u.text, v).is_some())
        .then(|| Ok(Intent::MarkPurchased(u.text.to_string())))
}

/// Matches `<verb> <argument>`, or the bare verb, which is an error the caller reports.
fn verb_argument(u: &Utterance<'_>, verbs: &[&str]) -> Option<Result<String, IntentError>> {
    for verb in verbs {
        if u.text.eq_ignore_ascii_case(verb) {
            return Some(Err(IntentError::EmptyArgument {
                verb: (*verb).to_string(),
            }));
        }
        let Some(rest) = strip_prefix_ci(u.text, verb) else {
            continue;
        };
        let Some(arg) = rest.strip_prefix(' ') else {
            continue;
        };
        let arg = arg.trim();
        if arg.is_empty() {
            return Some(Err(IntentError::EmptyArgument {
                verb: (*verb).to_string(),
            }));
        }
        return Some(Ok(arg.to_string()));
    }
    None
}

fn add_verb(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    verb_argument(u, ADD_VERBS).map(|r| r.map(Intent::AddDirect))
}

fn remove_verb(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    verb_argument(u, REMOVE_VERBS).map(|r| r.map(Intent::RemoveDirect))
}

fn list_keyword(u: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    LIST_KEYWORDS
        .iter()
        .any(|k| u.lower.contains(k))
        .then_some(Ok(Intent::ShowList))
}

fn fallback(_: &Utterance<'_>, _: &ResolveContext) -> RuleOutcome {
    Some(Ok(Intent::Unrecognized))
}
