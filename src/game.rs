//! Core data model for GameSmith
//!
//! Defines the [`GameCode`] payload (one game variant: HTML/CSS/JS sources
//! plus identity) and the [`HistoryEntry`] snapshot stored in the local
//! history list.

use serde::{Deserialize, Serialize};

/// Default name for a game when no prompt text is available
pub const UNTITLED_NAME: &str = "Untitled Game";

/// One game variant: identity plus three independent source strings
///
/// Any of the source fields may be empty. A `GameCode` is considered
/// present/editable only when at least one source field is non-empty;
/// see [`GameCode::has_content`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCode {
    /// Opaque unique identifier, stable across revisions until explicitly
    /// replaced. May be empty for hand-entered code that was never saved.
    #[serde(default)]
    pub id: String,
    /// Human-readable label
    #[serde(default)]
    pub name: String,
    /// Body markup for the game surface
    pub html: String,
    /// Stylesheet rules targeting elements in `html`
    pub css: String,
    /// Immediately-executable game logic
    pub js: String,
}

impl GameCode {
    /// Create a `GameCode` with a fresh UUID identity
    pub fn new(name: impl Into<String>, html: String, css: String, js: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            html,
            css,
            js,
        }
    }

    /// Returns true when at least one of the three source fields is
    /// non-empty. Empty-everywhere code is treated as "no game yet".
    ///
    /// # Examples
    ///
    /// ```
    /// use gamesmith::game::GameCode;
    ///
    /// let mut code = GameCode::default();
    /// assert!(!code.has_content());
    /// code.js = "console.log(1)".to_string();
    /// assert!(code.has_content());
    /// ```
    pub fn has_content(&self) -> bool {
        !self.html.is_empty() || !self.css.is_empty() || !self.js.is_empty()
    }

    /// Ensure the code carries an identity, assigning a fresh UUID when the
    /// id is empty. Returns the (possibly new) id.
    pub fn ensure_id(&mut self) -> &str {
        if self.id.is_empty() {
            self.id = uuid::Uuid::new_v4().to_string();
        }
        &self.id
    }

    /// Label for display: the name when set, otherwise [`UNTITLED_NAME`]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNTITLED_NAME
        } else {
            &self.name
        }
    }
}

/// A named, timestamped snapshot of a [`GameCode`]
///
/// The entry `id` identifies the snapshot itself and is distinct from
/// `code.id`, which identifies the game variant across re-saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this snapshot
    pub id: String,
    /// Label at time of save
    pub name: String,
    /// Owned copy of the game code, not a live reference
    pub code: GameCode,
    /// Capture time in Unix milliseconds (creation-ordering key)
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Build a snapshot of `code` with a fresh entry id and the current time
    pub fn capture(name: impl Into<String>, code: GameCode) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            code,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
