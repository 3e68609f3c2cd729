//! Preview document composer for GameSmith
//!
//! Turns the active [`GameCode`]'s three source strings into one standalone
//! HTML document: doctype, a head with a fixed style reset plus the game's
//! CSS, the game HTML as the body, and the game JavaScript wrapped in a
//! guard that catches and visibly reports any runtime exception inside the
//! rendered surface itself. The caller decides where the document goes
//! (typically a file the user opens in a browser).

use crate::error::Result;
use crate::game::GameCode;
use std::path::Path;

/// Baseline styles applied before the game's own CSS
const STYLE_RESET: &str = "html, body { margin: 0; padding: 0; width: 100%; height: 100%; box-sizing: border-box; font-family: sans-serif; }";

/// Compose a self-contained preview document from the game sources
///
/// Any of the source fields may be empty; the document is well-formed
/// either way.
///
/// # Examples
///
/// ```
/// use gamesmith::game::GameCode;
/// use gamesmith::preview::compose_document;
///
/// let code = GameCode {
///     html: "<div id=\"game\"></div>".to_string(),
///     ..Default::default()
/// };
/// let doc = compose_document(&code);
/// assert!(doc.starts_with("<!DOCTYPE html>"));
/// assert!(doc.contains("<div id=\"game\"></div>"));
/// ```
pub fn compose_document(code: &GameCode) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{reset}
{css}
</style>
</head>
<body>
{html}
<script>
(function () {{
  try {{
{js}
  }} catch (err) {{
    var report = document.createElement('pre');
    report.style.cssText = 'color:#b00020;background:#fff0f0;padding:12px;margin:8px;border:1px solid #b00020;white-space:pre-wrap;';
    report.textContent = 'Game script error: ' + (err && err.message ? err.message : err);
    document.body.appendChild(report);
  }}
}})();
</script>
</body>
</html>
"#,
        title = escape_title(code.display_name()),
        reset = STYLE_RESET,
        css = code.css,
        html = code.html,
        js = code.js,
    )
}

/// Compose the document and write it to `path`
pub fn export_document(code: &GameCode, path: &Path) -> Result<()> {
    let document = compose_document(code);
    std::fs::write(path, document)?;
    tracing::info!("Wrote preview document to {}", path.display());
    Ok(())
}

/// Minimal escaping for the document title; the game sources themselves are
/// emitted verbatim, that is the whole point of the preview.
fn escape_title(name: &str) -> String {
    name.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
