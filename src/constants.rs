//! Canonical vocabulary for the shopping assistant (pt-BR).
//! Every word list the interpreter consults lives here so a change of wording is a one-file change.

// Button tokens. A button press arrives as exactly one of these labels.
pub const BTN_LIST: &str = "📝 Ver Lista";
pub const BTN_ADD: &str = "➕ Adicionar";
pub const BTN_REMOVE: &str = "➖ Remover";
pub const BTN_SHOPPING_MODE: &str = "🛒 Iniciar Compras";
pub const BTN_EXIT_SHOPPING: &str = "🏠 Voltar ao Menu";
pub const BTN_HELP: &str = "❓ Ajuda";
pub const BTN_CANCEL: &str = "❌ Cancelar Ação";

/// Tokens that abort a pending add/remove and get re-read as a fresh command.
pub const MENU_TOKENS: &[&str] = &[BTN_LIST, BTN_SHOPPING_MODE, BTN_EXIT_SHOPPING, BTN_HELP];

pub const ADD_VERBS: &[&str] = &["adicionar", "adiciona"];
pub const REMOVE_VERBS: &[&str] = &["remover", "tira"];
/// Only honoured while shopping mode is on.
pub const PURCHASE_VERBS: &[&str] = &["peguei", "marcar", "marquei", "coloquei"];
pub const START_SHOPPING_PHRASES: &[&str] = &["fazendo compras"];
pub const LIST_KEYWORDS: &[&str] = &["listar", "lista"];

// Order matters: "peguei o" must be tried before "peguei".
pub const LEADING_FILLERS: &[&str] = &[
    "peguei o",
    "peguei a",
    "peguei",
    "comprei o",
    "comprei a",
    "comprei",
    "marquei o",
    "marquei a",
    "marquei",
    "marcar o",
    "marcar a",
    "marcar",
    "coloquei o",
    "coloquei a",
    "coloquei",
    "adicionar",
    "custou",
];
pub const TRAILING_FILLERS: &[&str] = &[" no valor de", " por", " custou", " valor"];

pub const CURRENCY_PREFIX: &str = "R$";
pub const DEFAULT_STT_MODEL: &str = "whisper-1";
pub const DEFAULT_STT_LANGUAGE: &str = "pt";
