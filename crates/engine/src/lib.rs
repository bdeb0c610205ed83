//! Session shell around the pure game core.
//!
//! The core crate only knows how to compute the next state. This crate owns
//! the pieces around it that a front end would otherwise have to provide:
//!
//! - [`Session`]: holds the current state, guards player intents and runs the
//!   match check after every tube mutation
//! - [`TickDriver`]: a tokio interval that delivers one tick per game second
//!   while the game is playing, and is cancelled on pause or game over
//! - [`SessionConfig`]: environment-driven configuration

pub mod config;
pub mod driver;
pub mod session;

pub use colorstack_core as core;
pub use colorstack_types as types;

pub use config::SessionConfig;
pub use driver::{Tick, TickDriver};
pub use session::Session;
