//! History command handlers

use crate::cli::HistoryCommand;
use crate::error::{GameSmithError, Result};
use crate::session::Session;
use chrono::{TimeZone, Utc};
use colored::Colorize;
use prettytable::{format, Table};

/// Handle history subcommands
pub fn handle_history(session: &mut Session, command: HistoryCommand) -> Result<()> {
    match command {
        HistoryCommand::List => list_history(session),
        HistoryCommand::Load { id } => {
            let entry_id = match resolve_entry_id(session, &id)? {
                Some(full) => full,
                None => {
                    println!("{}", format!("No saved game matches '{}'.", id).yellow());
                    return Ok(());
                }
            };
            // The session treats a missing id as a silent no-op; the id was
            // just resolved, so this always succeeds here.
            session.load_from_history(&entry_id);
            println!(
                "{} {} as the current game.",
                "Loaded".green(),
                session.active.display_name().bold()
            );
            Ok(())
        }
        HistoryCommand::Delete { id } => {
            let entry_id = match resolve_entry_id(session, &id)? {
                Some(full) => full,
                None => {
                    println!("{}", format!("No saved game matches '{}'.", id).yellow());
                    return Ok(());
                }
            };
            session.delete_from_history(&entry_id);
            println!("{}", format!("Deleted saved game {}", entry_id).green());
            Ok(())
        }
    }
}

fn list_history(session: &Session) -> Result<()> {
    if session.history.is_empty() {
        println!("{}", "No saved games found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "ID".bold(),
        "Name".bold(),
        "Saved".bold(),
        "Sources".bold()
    ]);

    for entry in &session.history {
        let id_short = &entry.id[..8.min(entry.id.len())];
        let name = if entry.name.is_empty() {
            crate::game::UNTITLED_NAME.to_string()
        } else {
            truncate_name(&entry.name)
        };
        let saved = Utc
            .timestamp_millis_opt(entry.timestamp)
            .single()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let sources = format!(
            "{}/{}/{}",
            entry.code.html.len(),
            entry.code.css.len(),
            entry.code.js.len()
        );

        table.add_row(prettytable::row![id_short.cyan(), name, saved, sources]);
    }

    println!("\nSaved Games:");
    table.printstd();
    println!();
    println!(
        "Use {} to continue working on one.",
        "gamesmith history load <ID>".cyan()
    );
    println!();

    Ok(())
}

/// Shorten long names for the table, counting characters rather than bytes
/// so multibyte names never split mid-character
fn truncate_name(name: &str) -> String {
    if name.chars().count() > 40 {
        let head: String = name.chars().take(37).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Resolve a full entry id or a unique prefix to a full id
///
/// Returns `Ok(None)` when nothing matches; an ambiguous prefix is a
/// validation error.
fn resolve_entry_id(session: &Session, id: &str) -> Result<Option<String>> {
    if session.history.iter().any(|e| e.id == id) {
        return Ok(Some(id.to_string()));
    }

    let matches: Vec<&str> = session
        .history
        .iter()
        .filter(|e| e.id.starts_with(id))
        .map(|e| e.id.as_str())
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some((*only).to_string())),
        _ => Err(GameSmithError::Validation(format!(
            "'{}' matches {} saved games, use a longer prefix",
            id,
            matches.len()
        ))
        .into()),
    }
}
