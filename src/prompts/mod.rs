//! Instruction templates for the generative backend
//!
//! Two templates exist: one for generating a brand-new mini-game from a
//! prompt alone, and one for revising the current sources according to the
//! prompt. Both require the model to answer with a single JSON object
//! carrying exactly three string fields: `html`, `css`, `js`.

pub mod new_game;
pub mod revision;

use crate::game::GameCode;

/// Shared response-contract section appended to both templates
pub(crate) const RESPONSE_CONTRACT: &str = r#"Return your response as a single JSON object with the following exact structure:
{
  "html": "<!DOCTYPE html><html><head>...</head><body>...</body></html> or just the body content like <div>...</div>",
  "css": "body { ... } .game-element { ... }",
  "js": "(function() { ... })(); // All game logic here"
}"#;

/// Builds the instruction for one generation call
///
/// Selects the revision template when `existing` is present and has at
/// least one non-empty source field; otherwise the new-game template.
///
/// # Examples
///
/// ```
/// use gamesmith::prompts::build_instruction;
///
/// let instruction = build_instruction("A simple Pong game", None);
/// assert!(instruction.contains("A simple Pong game"));
/// ```
pub fn build_instruction(prompt: &str, existing: Option<&GameCode>) -> String {
    match existing {
        Some(code) if code.has_content() => revision::revision_instruction(prompt, code),
        _ => new_game::new_game_instruction(prompt),
    }
}
