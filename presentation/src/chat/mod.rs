//! Interactive chat module
//!
//! Provides a readline-based interactive interface for research queries.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
