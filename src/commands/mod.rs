//! Command handlers for GameSmith
//!
//! One handler per CLI subcommand. Handlers own the user-facing output;
//! all session semantics live in [`crate::session`].

pub mod generate;
pub mod history;
pub mod preview;
pub mod reset;
pub mod save;
pub mod show;
