//! Show command handler

use crate::error::Result;
use crate::session::Session;
use colored::Colorize;

/// Print the current game and session state
pub fn run_show(session: &Session) -> Result<()> {
    if !session.active.has_content() {
        println!(
            "{}",
            "No current game. Use `gamesmith generate \"<idea>\"` to start one.".yellow()
        );
        return Ok(());
    }

    println!("Current game: {}", session.active.display_name().bold());
    if !session.active.id.is_empty() {
        println!("  id:   {}", session.active.id.cyan());
    }
    println!("  html: {} chars", session.active.html.len());
    println!("  css:  {} chars", session.active.css.len());
    println!("  js:   {} chars", session.active.js.len());
    println!("  saved games: {}", session.history.len());

    Ok(())
}
