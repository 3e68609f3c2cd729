//! Save command handler

use crate::error::Result;
use crate::session::Session;
use colored::Colorize;

/// Save the current game to history, optionally renaming it first
pub fn run_save(session: &mut Session, name: Option<String>) -> Result<()> {
    if let Some(name) = name {
        session.active.name = name;
    } else if session.active.name.is_empty() && !session.prompt.is_empty() {
        // Mirror the prompt into the name the way the prompt box doubles as
        // a save-name field.
        session.active.name = session.prompt.clone();
    }

    let entry = session.save_to_history()?;

    println!(
        "{} {} to history ({})",
        "Saved".green(),
        entry.name.bold(),
        &entry.id[..8.min(entry.id.len())]
    );

    Ok(())
}
