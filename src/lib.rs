//! GameSmith - prompt-driven web mini-game generator
//!
//! This library provides the core functionality for the GameSmith CLI:
//! building generation/revision instructions, calling the generative
//! backend, validating its structured JSON result, managing the editing
//! session, and persisting the current game plus a saved-game history
//! locally.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `game`: the `GameCode`/`HistoryEntry` data model
//! - `generation`: the generation client (templates, parsing, validation)
//! - `prompts`: new-game and revision instruction templates
//! - `providers`: generative backend abstraction and the Gemini client
//! - `session`: session state and its mutation contracts
//! - `storage`: the local key-value persistence store
//! - `preview`: standalone preview document composition
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod generation;
pub mod preview;
pub mod prompts;
pub mod providers;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{GameSmithError, Result};
pub use game::{GameCode, HistoryEntry};
pub use generation::GenerationClient;
pub use session::Session;
pub use storage::GameStore;
