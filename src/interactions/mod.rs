//! Routes component interactions. Only the shopping keyboard family (`list_*`) exists.

pub mod ids;
pub mod list_handler;
pub mod util;
