//! Revision instruction template
//!
//! Asks the model to modify the current game sources according to the
//! user's instructions while preserving playability. The existing HTML, CSS,
//! and JavaScript are embedded verbatim in the instruction payload.

use crate::game::GameCode;
use crate::prompts::RESPONSE_CONTRACT;

/// Generates the instruction for revising existing game code
///
/// # Examples
///
/// ```
/// use gamesmith::game::GameCode;
/// use gamesmith::prompts::revision::revision_instruction;
///
/// let code = GameCode {
///     js: "let score = 0;".to_string(),
///     ..Default::default()
/// };
/// let instruction = revision_instruction("Make the player jump higher", &code);
/// assert!(instruction.contains("let score = 0;"));
/// ```
pub fn revision_instruction(prompt: &str, existing: &GameCode) -> String {
    format!(
        r#"You are an expert game development assistant.
Your task is to revise and improve the provided HTML, CSS, and JavaScript code based on the user's new instructions.
The user wants to modify their existing game. Apply the requested changes and ensure the game remains functional and self-contained.
All necessary HTML structure, CSS styling, and JavaScript logic should be provided.
The JavaScript should directly manipulate DOM elements defined in the HTML.
The CSS should provide basic but appealing styling.
The HTML should be the core structure for the game elements.

{contract}

User's revision request: "{prompt}"

Current HTML:
```html
{html}
```

Current CSS:
```css
{css}
```

Current JavaScript:
```javascript
{js}
```

Generate the revised game code. Ensure the JavaScript is functional and incorporates the user's requested changes.
The HTML should be the content that goes inside the <body> tag of the game iframe.
The CSS rules should target elements within that HTML.
The JavaScript should be immediately executable and set up the game.
Focus on accurately implementing the user's revisions while maintaining playability and simplicity.
"#,
        contract = RESPONSE_CONTRACT,
        prompt = prompt,
        html = existing.html,
        css = existing.css,
        js = existing.js,
    )
}
