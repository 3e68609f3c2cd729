//! Reset command handler

use crate::error::Result;
use crate::session::Session;
use colored::Colorize;
use std::io::Write;

/// Clear the current prompt and code behind a confirmation gate
///
/// The reset is destructive, so it only proceeds with `--yes` or an
/// interactive "y" answer.
pub fn run_reset(session: &mut Session, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset the current prompt and code? This clears the editors.")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    session.reset();
    println!("{}", "Current game cleared. History is untouched.".green());

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
