//! Integration tests for session persistence
//!
//! Verifies that the save/load/delete/reset workflow round-trips through
//! the SQLite store: every mutation a command performs must be visible to
//! a session opened later over the same database file.

use tempfile::TempDir;

use gamesmith::{GameCode, GameStore, Session};

fn open_session(dir: &TempDir) -> Session {
    let store = GameStore::new_with_path(dir.path().join("games.db")).expect("store");
    Session::open(store)
}

fn sample_code(name: &str) -> GameCode {
    GameCode::new(
        name,
        format!("<div>{}</div>", name),
        "body{margin:0}".to_string(),
        "init()".to_string(),
    )
}

#[test]
fn test_saved_history_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let entry_id = {
        let mut session = open_session(&dir);
        session.active = sample_code("Pong");
        let entry = session.save_to_history().unwrap();
        session.active = sample_code("Snake");
        session.save_to_history().unwrap();
        entry.id
    };

    let session = open_session(&dir);
    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0].name, "Snake");
    assert_eq!(session.history[1].name, "Pong");
    assert_eq!(session.history[1].id, entry_id);
}

#[test]
fn test_load_then_reopen_shows_loaded_game_as_current() {
    let dir = TempDir::new().unwrap();

    let entry_id = {
        let mut session = open_session(&dir);
        session.active = sample_code("Pong");
        let entry = session.save_to_history().unwrap();
        session.active = sample_code("Snake");
        session.save_to_history().unwrap();
        entry.id
    };

    {
        let mut session = open_session(&dir);
        assert!(session.load_from_history(&entry_id));
        assert_eq!(session.active.name, "Pong");
    }

    let session = open_session(&dir);
    assert_eq!(session.active.name, "Pong");
    assert_eq!(session.active.html, "<div>Pong</div>");
}

#[test]
fn test_delete_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    let entry_id = {
        let mut session = open_session(&dir);
        session.active = sample_code("Pong");
        let entry = session.save_to_history().unwrap();
        session.active = sample_code("Snake");
        session.save_to_history().unwrap();
        entry.id
    };

    {
        let mut session = open_session(&dir);
        assert!(session.delete_from_history(&entry_id));
    }

    let session = open_session(&dir);
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].name, "Snake");
}

#[test]
fn test_delete_last_entry_leaves_empty_history_on_reopen() {
    let dir = TempDir::new().unwrap();

    let entry_id = {
        let mut session = open_session(&dir);
        session.active = sample_code("Pong");
        session.save_to_history().unwrap().id
    };

    {
        let mut session = open_session(&dir);
        assert!(session.delete_from_history(&entry_id));
        assert!(session.history.is_empty());
    }

    // The rewrite must have cleared the stored list too, not left the
    // stale single-entry record behind.
    let session = open_session(&dir);
    assert!(session.history.is_empty());
}

#[test]
fn test_reset_clears_current_but_not_history_on_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut session = open_session(&dir);
        session.active = sample_code("Pong");
        session.save_to_history().unwrap();
        session.reset();
    }

    let session = open_session(&dir);
    assert!(!session.active.has_content());
    assert_eq!(session.preview_version, 0);
    assert_eq!(session.history.len(), 1);
}

#[test]
fn test_resave_in_place_persists_position() {
    let dir = TempDir::new().unwrap();

    {
        let mut session = open_session(&dir);
        session.active = sample_code("A");
        session.save_to_history().unwrap();
        let game_id = session.active.id.clone();

        session.active = sample_code("B");
        session.save_to_history().unwrap();

        // Re-save the first game under its original code id.
        session.active = sample_code("A revised");
        session.active.id = game_id;
        session.save_to_history().unwrap();
    }

    let session = open_session(&dir);
    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0].name, "B");
    assert_eq!(session.history[1].name, "A revised");
}

#[test]
fn test_corrupt_history_record_is_dropped_on_open() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("games.db");

    {
        let store = GameStore::new_with_path(&db_path).unwrap();
        let mut session = Session::open(store);
        session.active = sample_code("Pong");
        session.save_to_history().unwrap();
    }

    // Corrupt the stored list: keep the good entry, add a truncated one.
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        let raw: String = conn
            .query_row("SELECT value FROM kv WHERE key = 'game-history'", [], |r| {
                r.get(0)
            })
            .unwrap();
        let mut entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        entries.push(serde_json::json!({"id": "broken", "name": "no code here"}));
        conn.execute(
            "UPDATE kv SET value = ?1 WHERE key = 'game-history'",
            [serde_json::to_string(&entries).unwrap()],
        )
        .unwrap();
    }

    let session = open_session(&dir);
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].name, "Pong");
}
