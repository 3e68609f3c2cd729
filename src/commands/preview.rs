//! Preview command handler

use crate::config::Config;
use crate::error::{GameSmithError, Result};
use crate::preview::export_document;
use crate::session::Session;
use colored::Colorize;
use std::path::PathBuf;

/// Re-render the current game and export it as a standalone document
pub fn run_preview(
    config: &Config,
    session: &mut Session,
    output: Option<PathBuf>,
) -> Result<()> {
    if !session.active.has_content() {
        return Err(GameSmithError::Validation(
            "There's no code to preview. Generate or load a game first.".to_string(),
        )
        .into());
    }

    session.apply_preview();

    let path = output.unwrap_or_else(|| PathBuf::from(&config.preview.output));
    export_document(&session.active, &path)?;

    println!(
        "{} preview v{} of {} to {}",
        "Exported".green(),
        session.preview_version,
        session.active.display_name().bold(),
        path.display()
    );

    Ok(())
}
