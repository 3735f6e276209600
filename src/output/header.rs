// src/output/header.rs

use crate::constants::FILE_PLACEHOLDER;

/// Substitutes a display path into a heading template.
///
/// Only the first `{file}` is replaced. A template without the placeholder is
/// used verbatim.
///
/// ```
/// use tscribe::output::header::render_heading;
///
/// assert_eq!(render_heading("### {file}", "src/a.ts"), "### src/a.ts");
/// assert_eq!(render_heading("// --- {file} ---", "b.ts"), "// --- b.ts ---");
/// assert_eq!(render_heading("FILE", "b.ts"), "FILE");
/// ```
pub fn render_heading(template: &str, display_path: &str) -> String {
    template.replacen(FILE_PLACEHOLDER, display_path, 1)
}
