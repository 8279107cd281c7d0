//! Central UI style constants and helpers.

// Standard target widths for padded button labels (approx char counts before Discord trimming)
pub const BTN_W_STD: usize = 14; // menu buttons (Ver Lista, Remover)
pub const BTN_W_PRIMARY: usize = 18; // mode switches

/// Pads a label to a target visible width using spaces so multi-row keyboards align better.
/// Discord collapses long runs of trailing spaces, so at most 2 are added.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_primary(label: &str) -> String {
    pad_label(label, BTN_W_PRIMARY)
}
pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}
