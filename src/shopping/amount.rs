//! Pulls a price out of a free-text purchase utterance ("peguei leite por 4,50").
//!
//! The price is the last number mentioned; whatever precedes it, minus filler words,
//! is the item name. Anything after the number ("reais", "cada") is discarded.

use super::strip_prefix_ci;
use crate::constants::{CURRENCY_PREFIX, LEADING_FILLERS, TRAILING_FILLERS};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Integer digits accepted in a spoken price; keeps cart totals far from `Decimal`'s limits.
const MAX_INTEGER_DIGITS: usize = 12;

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("amount pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("⚠️ Não encontrei o preço. Tente: 'peguei leite 4.50'")]
    NoAmountFound,
    #[error("⚠️ Erro ao entender o valor numérico.")]
    InvalidAmount(String),
    #[error("⚠️ Entendi o preço ({}), mas não o nome do produto.", brl(.amount))]
    EmptyItemName { amount: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAmount {
    pub item_name: String,
    pub amount: Decimal,
}

pub fn extract_amount(utterance: &str) -> Result<ExtractedAmount, AmountError> {
    let token = AMOUNT_PATTERN
        .find_iter(utterance)
        .last()
        .ok_or(AmountError::NoAmountFound)?;

    let integer_digits = token.as_str().split(['.', ',']).next().map_or(0, |d| d.chars().count());
    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(AmountError::InvalidAmount(token.as_str().to_string()));
    }

    let normalized = token.as_str().replace(',', ".");
    let amount = Decimal::from_str(&normalized)
        .map_err(|_| AmountError::InvalidAmount(token.as_str().to_string()))?;

    let before = &utterance[..token.start()];
    let item_name = strip_trailing_fillers(strip_leading_filler(before.trim()))
        .trim()
        .to_string();
    if item_name.is_empty() {
        return Err(AmountError::EmptyItemName { amount });
    }

    Ok(ExtractedAmount { item_name, amount })
}

/// Removes at most one leading filler phrase. A filler only counts when it ends on a word boundary,
/// so "peguei ovos" loses "peguei" and not "peguei o".
fn strip_leading_filler(text: &str) -> &str {
    for filler in LEADING_FILLERS {
        let Some(rest) = strip_prefix_ci(text, filler) else {
            continue;
        };
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }
    text
}

/// A residual made only of a filler word ("peguei por 5" leaves "por") is stripped to nothing.
fn strip_trailing_fillers(text: &str) -> &str {
    let mut out = text;
    for filler in TRAILING_FILLERS {
        if out.eq_ignore_ascii_case(filler.trim_start()) {
            return "";
        }
        let Some(cut) = out.len().checked_sub(filler.len()) else {
            continue;
        };
        if out.get(cut..).is_some_and(|tail| tail.eq_ignore_ascii_case(filler)) {
            out = out[..cut].trim_end();
        }
    }
    out
}

/// Renders a monetary value as `R$ 0.00`: two decimals, '.' separator, half away from zero.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{CURRENCY_PREFIX} {rounded:.2}")
}

fn brl(value: &Decimal) -> String {
    format_brl(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn takes_the_last_number_as_price() {
        let got = extract_amount("peguei 2 caixas de leite 9,80").unwrap();
        assert_eq!(got.item_name, "2 caixas de leite");
        assert_eq!(got.amount, dec("9.80"));
    }

    #[test]
    fn discards_text_after_the_price() {
        let got = extract_amount("Peguei leite por 4.50 reais").unwrap();
        assert_eq!(got.item_name, "leite");
        assert_eq!(got.amount, dec("4.50"));
    }

    #[test]
    fn filler_respects_word_boundary() {
        let got = extract_amount("peguei ovos 12").unwrap();
        assert_eq!(got.item_name, "ovos");
    }

    #[test]
    fn filler_word_alone_is_not_an_item_name() {
        for input in ["peguei por 5", "peguei o custou 5", "peguei custou 3", "valor 9"] {
            let err = extract_amount(input).unwrap_err();
            assert!(matches!(err, AmountError::EmptyItemName { .. }), "{input}: {err:?}");
        }
    }

    #[test]
    fn item_ending_in_filler_lookalike_is_kept() {
        let got = extract_amount("peguei porco 20").unwrap();
        assert_eq!(got.item_name, "porco");
    }

    #[test]
    fn oversized_price_is_rejected() {
        let err = extract_amount("peguei arroz 79228162514264337593543950335").unwrap_err();
        assert!(matches!(err, AmountError::InvalidAmount(_)));
        let ok = extract_amount("peguei carro 999999999999,99").unwrap();
        assert_eq!(ok.amount, dec("999999999999.99"));
    }

    #[test]
    fn long_trailing_filler() {
        let got = extract_amount("coloquei o café no valor de 18,90").unwrap();
        assert_eq!(got.item_name, "café");
        assert_eq!(got.amount, dec("18.90"));
    }

    #[test]
    fn non_ascii_digits_are_rejected_as_invalid() {
        let err = extract_amount("peguei leite ٤").unwrap_err();
        assert!(matches!(err, AmountError::InvalidAmount(_)));
    }

    #[test]
    fn price_only_reports_empty_name_with_price() {
        let err = extract_amount("peguei 7").unwrap_err();
        assert_eq!(err, AmountError::EmptyItemName { amount: dec("7") });
        assert!(err.to_string().contains("R$ 7.00"));
    }

    #[test]
    fn brl_formatting() {
        assert_eq!(format_brl(dec("6")), "R$ 6.00");
        assert_eq!(format_brl(dec("4.5")), "R$ 4.50");
        assert_eq!(format_brl(dec("2.005")), "R$ 2.01");
        assert_eq!(format_brl(Decimal::MAX), "R$ 79228162514264337593543950335.00");
    }
}
