//! New-game instruction template
//!
//! Asks the model for a complete, self-contained, playable mini-game built
//! from the user's prompt alone. Complex requests are explicitly scoped down
//! to a mini-game.

use crate::prompts::RESPONSE_CONTRACT;

/// Generates the instruction for a brand-new game
///
/// # Examples
///
/// ```
/// use gamesmith::prompts::new_game::new_game_instruction;
///
/// let instruction = new_game_instruction("A simple Pong game");
/// assert!(instruction.contains("A simple Pong game"));
/// assert!(instruction.contains("mini-game"));
/// ```
pub fn new_game_instruction(prompt: &str) -> String {
    format!(
        r#"You are an expert game development assistant. Your task is to generate the complete HTML, CSS, and JavaScript code for a simple, playable web-based game based on the user's prompt.
The game must be self-contained: all necessary HTML structure, CSS styling, and JavaScript logic should be provided.
The JavaScript should directly manipulate DOM elements defined in the HTML. Avoid external libraries unless absolutely essential and simple to include (e.g. a font).
The CSS should provide basic but appealing styling to make the game look good.
The HTML should be the core structure for the game elements.

{contract}

User Prompt: "{prompt}"

Generate the game code. Ensure the JavaScript is functional and creates an interactive experience.
For complex game requests like "Chess" or "Pacman", generate a very simplified version appropriate for a 'mini-game'.
The HTML should be the content that goes inside the <body> tag of the game iframe.
The CSS rules should target elements within that HTML.
The JavaScript should be immediately executable and set up the game.
Focus on playability and simplicity.
"#,
        contract = RESPONSE_CONTRACT,
        prompt = prompt,
    )
}
