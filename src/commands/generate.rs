//! Generate command handler

use crate::config::Config;
use crate::error::Result;
use crate::generation::GenerationClient;
use crate::providers::GeminiProvider;
use crate::session::Session;
use colored::Colorize;

/// Generate a new game or revise the current one
///
/// The revision path is taken automatically when the session already holds
/// editable code.
pub async fn run_generate(config: &Config, session: &mut Session, prompt: &str) -> Result<()> {
    let revising = session.active.has_content();

    // Credential problems surface here, before any request goes out.
    let provider = GeminiProvider::new(&config.provider)?;
    let client = GenerationClient::new(Box::new(provider));

    println!(
        "{}",
        if revising {
            "Revising current game...".cyan()
        } else {
            "Generating game...".cyan()
        }
    );

    session.submit(prompt, &client).await?;

    println!(
        "{} {} ({} html, {} css, {} js chars)",
        if revising { "Revised" } else { "Generated" }.green(),
        session.active.display_name().bold(),
        session.active.html.len(),
        session.active.css.len(),
        session.active.js.len(),
    );
    println!(
        "Run {} to export a playable preview.",
        "gamesmith preview".cyan()
    );

    Ok(())
}
