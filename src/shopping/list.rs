//! Per-user shopping list: items keyed by their normalized name, kept in insertion order.

use super::amount::{AmountError, extract_amount, format_brl};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Nome inválido.")]
    InvalidName,
    #[error("❌ '{0}' já está na lista.")]
    DuplicateItem(String),
    #[error("⚠️ '{0}' não encontrado na lista.")]
    NotFound(String),
}

/// Trimmed, lowercased form used as the identity of an item.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    /// Casing as first entered.
    pub name: String,
    pub in_cart: bool,
    pub price: Option<Decimal>,
}

impl Item {
    fn new(name: &str) -> Self {
        Self {
            key: normalize_key(name),
            name: name.trim().to_string(),
            in_cart: false,
            price: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        let key = normalize_key(name);
        self.items.iter().find(|i| i.key == key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|i| i.key == key)
    }

    pub fn add(&mut self, name: &str) -> Result<String, ListError> {
        let name = name.trim();
        let key = normalize_key(name);
        if key.is_empty() {
            return Err(ListError::InvalidName);
        }
        if self.position(&key).is_some() {
            return Err(ListError::DuplicateItem(name.to_string()));
        }
        self.items.push(Item::new(name));
        Ok(format!("✅ '{name}' adicionado!"))
    }

    pub fn remove(&mut self, name: &str) -> Result<String, ListError> {
        let name = name.trim();
        let key = normalize_key(name);
        if key.is_empty() {
            return Err(ListError::InvalidName);
        }
        let Some(idx) = self.position(&key) else {
            return Err(ListError::NotFound(name.to_string()));
        };
        self.items.remove(idx);
        Ok(format!("🗑️ '{name}' removido."))
    }

    /// Marks the item named in a purchase utterance as in the cart with the spoken price.
    /// Unknown items are added on the fly.
    pub fn mark_purchased(&mut self, utterance: &str) -> Result<String, AmountError> {
        let extracted = extract_amount(utterance)?;
        let key = normalize_key(&extracted.item_name);
        let price = extracted.amount;

        let headline = match self.position(&key) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.in_cart = true;
                item.price = Some(price);
                format!("✅ '{}' marcado no carrinho", extracted.item_name)
            }
            None => {
                let mut item = Item::new(&extracted.item_name);
                item.in_cart = true;
                item.price = Some(price);
                self.items.push(item);
                format!("➕ '{}' adicionado e marcado", extracted.item_name)
            }
        };

        Ok(format!(
            "{headline} ({}).\n💰 Total parcial: {}",
            format_brl(price),
            format_brl(self.cart_total())
        ))
    }

    /// Sum of known prices over items already in the cart.
    pub fn cart_total(&self) -> Decimal {
        self.items
            .iter()
            .filter(|i| i.in_cart)
            .filter_map(|i| i.price)
            .sum()
    }

    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }

        let (in_cart, pending): (Vec<&Item>, Vec<&Item>) =
            self.items.iter().partition(|i| i.in_cart);

        let mut lines = vec!["📝 **LISTA DE COMPRAS**".to_string(), String::new()];
        if pending.is_empty() {
            lines.push("🎉 Nada pendente!".to_string());
        } else {
            lines.push("**Falta pegar:**".to_string());
            lines.extend(pending.iter().map(|i| format!("⬜ {}", i.name)));
        }

        if !in_cart.is_empty() {
            lines.push(String::new());
            lines.push("**Já no carrinho:**".to_string());
            lines.extend(in_cart.iter().map(|i| {
                let price = i.price.map_or_else(|| "-".to_string(), format_brl);
                format!("✅ {} ({price})", i.name)
            }));
            lines.push(String::new());
            lines.push(format!("💰 **Total:** {}", format_brl(self.cart_total())));
        }

        lines.join("\n")
    }
}

pub const EMPTY_LIST_MESSAGE: &str = "Sua lista está vazia. 🦗";
