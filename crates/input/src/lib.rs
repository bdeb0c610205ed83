//! Command input module (engine-facing).
//!
//! No UI framework is involved here. The module maps
//! one line of text into a [`Command`] that the session shell turns into
//! player intents.

pub mod map;

pub use colorstack_types as types;

pub use map::{parse_command, Command};
