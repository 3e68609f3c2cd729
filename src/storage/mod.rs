//! Local persistence store for GameSmith
//!
//! A durable key-value mapping from logical keys to string values, backed by
//! an embedded SQLite database in the user's data directory. The store holds
//! the "current" in-progress game code (one key per field) and the full
//! history list (one JSON blob). Writes are best-effort: failures are logged
//! and never block the user flow.

use crate::error::{GameSmithError, Result};
use crate::game::{GameCode, HistoryEntry};
use anyhow::Context;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

const KEY_CURRENT_HTML: &str = "current-html";
const KEY_CURRENT_CSS: &str = "current-css";
const KEY_CURRENT_JS: &str = "current-js";
const KEY_CURRENT_ID: &str = "current-id";
const KEY_CURRENT_NAME: &str = "current-name";
const KEY_GAME_HISTORY: &str = "game-history";

/// Storage backend for the current game code and saved-game history
pub struct GameStore {
    db_path: PathBuf,
}

impl GameStore {
    /// Create a new store instance
    ///
    /// Initializes the database file in the user's data directory.
    pub fn new() -> Result<Self> {
        // Allow override of the store path via environment variable. This
        // makes it easy to point the binary at a test DB or alternate file
        // without changing the user's application data dir.
        if let Ok(override_path) = std::env::var("GAMESMITH_STORE_DB") {
            return Self::new_with_path(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "xbcsmith", "gamesmith")
            .ok_or_else(|| GameSmithError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| GameSmithError::Storage(e.to_string()))?;

        let db_path = data_dir.join("games.db");
        let store = Self { db_path };

        store.init()?;

        Ok(store)
    }

    /// Create a new store instance that uses the specified database path.
    ///
    /// This is primarily useful for tests where the default application data
    /// directory is not desirable (for example, using a temporary directory).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gamesmith::storage::GameStore;
    ///
    /// let store = GameStore::new_with_path("/tmp/test_games.db").unwrap();
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        // Ensure parent directory exists so opening the DB file succeeds.
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| GameSmithError::Storage(e.to_string()))?;
        }

        let store = Self { db_path };
        store.init()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create kv table")
        .map_err(|e| GameSmithError::Storage(e.to_string()))?;

        Ok(())
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open database")
            .map_err(|e| GameSmithError::Storage(e.to_string()).into())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .context("Failed to write key")
        .map_err(|e| GameSmithError::Storage(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM kv WHERE key = ?", params![key])
            .context("Failed to delete key")
            .map_err(|e| GameSmithError::Storage(e.to_string()))?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?", params![key], |row| {
            row.get(0)
        })
        .optional()
        .context("Failed to read key")
        .map_err(|e| GameSmithError::Storage(e.to_string()).into())
    }

    /// Persist the current in-progress code, one key per field
    ///
    /// Best-effort: a write failure (disk full, locked database) is logged
    /// and swallowed, never surfaced to the caller.
    pub fn save_current_code(&self, code: &GameCode) {
        let writes = [
            (KEY_CURRENT_HTML, code.html.as_str()),
            (KEY_CURRENT_CSS, code.css.as_str()),
            (KEY_CURRENT_JS, code.js.as_str()),
            (KEY_CURRENT_ID, code.id.as_str()),
            (KEY_CURRENT_NAME, code.name.as_str()),
        ];
        for (key, value) in writes {
            if let Err(e) = self.set(key, value) {
                tracing::warn!("Failed to persist {}: {}", key, e);
            }
        }
    }

    /// Remove the current-code record entirely
    ///
    /// Distinct from saving an all-empty `GameCode`: after clearing,
    /// `load_current_code` returns `None` and a fresh session starts with
    /// no initial render. Best-effort like the other writes.
    pub fn clear_current_code(&self) {
        let keys = [
            KEY_CURRENT_HTML,
            KEY_CURRENT_CSS,
            KEY_CURRENT_JS,
            KEY_CURRENT_ID,
            KEY_CURRENT_NAME,
        ];
        for key in keys {
            if let Err(e) = self.delete(key) {
                tracing::warn!("Failed to clear {}: {}", key, e);
            }
        }
    }

    /// Load the current in-progress code
    ///
    /// Returns `None` unless all three source keys are present (possibly as
    /// empty strings); `id` and `name` are read independently and default to
    /// empty strings when absent.
    pub fn load_current_code(&self) -> Option<GameCode> {
        let read = |key: &str| match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        };

        let html = read(KEY_CURRENT_HTML)?;
        let css = read(KEY_CURRENT_CSS)?;
        let js = read(KEY_CURRENT_JS)?;

        Some(GameCode {
            id: read(KEY_CURRENT_ID).unwrap_or_default(),
            name: read(KEY_CURRENT_NAME).unwrap_or_default(),
            html,
            css,
            js,
        })
    }

    /// Persist the full history list as one JSON value
    ///
    /// The list is rewritten in full on every mutation; best-effort.
    pub fn save_game_history(&self, entries: &[HistoryEntry]) {
        let json = match serde_json::to_string(entries) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("Failed to serialize game history: {}", e);
                return;
            }
        };
        if let Err(e) = self.set(KEY_GAME_HISTORY, &json) {
            tracing::warn!("Failed to persist game history: {}", e);
        }
    }

    /// Load the history list, silently dropping malformed entries
    ///
    /// Each element must carry a string `id`, string `name`, numeric
    /// `timestamp`, and a `code` object with string `html`/`css`/`js`;
    /// anything else is filtered out rather than aborting the whole load.
    /// Survivor order is preserved.
    pub fn load_game_history(&self) -> Vec<HistoryEntry> {
        let json = match self.get(KEY_GAME_HISTORY) {
            Ok(Some(j)) => j,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read game history: {}", e);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&json) {
            Ok(serde_json::Value::Array(values)) => values,
            Ok(_) | Err(_) => {
                tracing::warn!("Stored game history is not a JSON array, discarding");
                return Vec::new();
            }
        };

        values
            .into_iter()
            .filter(is_well_formed_entry)
            .filter_map(|v| match serde_json::from_value::<HistoryEntry>(v) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Dropping undeserializable history entry: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Structural check for one stored history element
fn is_well_formed_entry(value: &serde_json::Value) -> bool {
    let obj = match value.as_object() {
        Some(o) => o,
        None => return false,
    };
    let has_string = |o: &serde_json::Map<String, serde_json::Value>, key: &str| {
        o.get(key).map(|v| v.is_string()).unwrap_or(false)
    };

    if !has_string(obj, "id") || !has_string(obj, "name") {
        return false;
    }
    if !obj.get("timestamp").map(|v| v.is_number()).unwrap_or(false) {
        return false;
    }
    match obj.get("code").and_then(|v| v.as_object()) {
        Some(code) => {
            has_string(code, "html") && has_string(code, "css") && has_string(code, "js")
        }
        None => false,
    }
}
