pub mod buttons;
pub mod keyboard;
pub mod style;

pub use keyboard::action_rows;
