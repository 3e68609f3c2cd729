//! Session state for GameSmith
//!
//! The single source of truth for the active editing session. A [`Session`]
//! is constructed once at startup, seeded from the persistence store, and
//! mediates every user intent (generate, apply, save, load, delete, reset)
//! between the generation client and the store. Persistence is an explicit
//! call at the end of each successful mutation, never an implicit observer.

use crate::error::{GameSmithError, Result};
use crate::game::{GameCode, HistoryEntry};
use crate::generation::GenerationClient;
use crate::storage::GameStore;

/// In-memory model of the active editing session
pub struct Session {
    store: GameStore,
    /// Current prompt text (doubles as the save name seed)
    pub prompt: String,
    /// The active game code; possibly all-empty when nothing is loaded
    pub active: GameCode,
    /// True while a generation request is in flight
    pub is_loading: bool,
    /// Last user-facing error message, cleared by successful intents
    pub last_error: Option<String>,
    /// Saved games, most recently saved first for new insertions
    pub history: Vec<HistoryEntry>,
    /// Monotonically increasing counter; a bump forces a preview remount
    pub preview_version: u64,
}

impl Session {
    /// Open a session seeded from the store
    ///
    /// Reads the current code and history once. When a current-code record
    /// exists, `preview_version` is bumped once to trigger an initial
    /// render.
    pub fn open(store: GameStore) -> Self {
        let mut session = Self {
            store,
            prompt: String::new(),
            active: GameCode::default(),
            is_loading: false,
            last_error: None,
            history: Vec::new(),
            preview_version: 0,
        };

        if let Some(code) = session.store.load_current_code() {
            session.active = code;
            session.preview_version += 1;
        }
        session.history = session.store.load_game_history();

        session
    }

    /// Generate a new game or revise the current one from a prompt
    ///
    /// Fails fast on an empty/whitespace prompt. Uses the active code as
    /// the revision base iff it has content, handing it a fresh id when it
    /// has none. On success the active code is replaced and the preview
    /// version bumped; on failure the prior state is left untouched. The
    /// loading flag is cleared exactly once either way.
    pub async fn submit(&mut self, prompt_text: &str, client: &GenerationClient) -> Result<()> {
        let trimmed = prompt_text.trim();
        if trimmed.is_empty() {
            let err = GameSmithError::Validation(
                "Please enter a game description or revision instructions".to_string(),
            );
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        self.prompt = trimmed.to_string();
        self.is_loading = true;
        self.last_error = None;

        // The revision base is a copy: the active code itself must not
        // change unless generation succeeds.
        let existing = if self.active.has_content() {
            let mut base = self.active.clone();
            base.ensure_id();
            Some(base)
        } else {
            None
        };

        let result = client.generate(trimmed, existing.as_ref()).await;
        self.is_loading = false;

        match result {
            Ok(code) => {
                self.active = code;
                self.preview_version += 1;
                self.store.save_current_code(&self.active);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to generate/revise game: {}", e));
                Err(e)
            }
        }
    }

    /// Force the preview to re-render without calling the backend
    ///
    /// Lets manually edited source be picked up by the next export.
    pub fn apply_preview(&mut self) {
        self.preview_version += 1;
    }

    /// Snapshot the active code into the history list
    ///
    /// Re-saving a game whose `code.id` already has an entry replaces that
    /// entry in place (same position); otherwise the new entry is
    /// prepended. Clears the prompt and any error on success.
    pub fn save_to_history(&mut self) -> Result<HistoryEntry> {
        if !self.active.has_content() {
            let err = GameSmithError::Validation(
                "There's no code to save to history. Generate or write some code first."
                    .to_string(),
            );
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }

        // Hand-entered code may still lack an identity at this point.
        self.active.ensure_id();

        let entry = HistoryEntry::capture(self.active.name.clone(), self.active.clone());
        let saved = entry.clone();

        match self
            .history
            .iter()
            .position(|e| e.code.id == self.active.id)
        {
            Some(idx) => self.history[idx] = entry,
            None => self.history.insert(0, entry),
        }

        self.store.save_game_history(&self.history);
        self.store.save_current_code(&self.active);
        self.prompt.clear();
        self.last_error = None;

        Ok(saved)
    }

    /// Replace the session contents from a saved entry
    ///
    /// A missing `entry_id` is a silent no-op. On success the prompt and
    /// all of the active code's fields (including id and name) are
    /// replaced, the preview version bumped, and any error cleared.
    /// Returns whether an entry was loaded.
    pub fn load_from_history(&mut self, entry_id: &str) -> bool {
        let entry = match self.history.iter().find(|e| e.id == entry_id) {
            Some(e) => e.clone(),
            None => return false,
        };

        self.prompt = entry.name.clone();
        self.active = entry.code;
        self.preview_version += 1;
        self.last_error = None;
        self.store.save_current_code(&self.active);

        true
    }

    /// Remove an entry from history
    ///
    /// A missing id is a no-op, not an error. Returns whether an entry was
    /// removed.
    pub fn delete_from_history(&mut self, entry_id: &str) -> bool {
        let before = self.history.len();
        self.history.retain(|e| e.id != entry_id);
        let removed = self.history.len() != before;

        if removed {
            self.store.save_game_history(&self.history);
        }

        removed
    }

    /// Clear the prompt and all of the active code's fields
    ///
    /// Destructive; callers must gate this behind explicit user
    /// confirmation. History is untouched. The stored current-code record
    /// is removed outright, so a later session starts with no game rather
    /// than an all-empty one.
    pub fn reset(&mut self) {
        self.prompt.clear();
        self.active = GameCode::default();
        self.preview_version += 1;
        self.last_error = None;
        self.store.clear_current_code();
    }
}
