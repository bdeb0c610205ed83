//! ColorStack (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use `colorstack::{core,engine,input,types}`.

pub use colorstack_core as core;
pub use colorstack_engine as engine;
pub use colorstack_input as input;
pub use colorstack_types as types;
