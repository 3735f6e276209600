// src/config/parsing.rs

use crate::constants::FILE_PLACEHOLDER;
use crate::core_types::OutputFormat;
use crate::diagnostics::Diagnostics;
use std::path::{Component, Path, PathBuf};

/// Makes `raw` absolute against `cwd` and removes `.`/`..` lexically.
///
/// The path does not need to exist; a missing scan root is handled later.
pub(super) fn resolve_path(raw: &str, cwd: &Path) -> PathBuf {
    let joined = cwd.join(raw);
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Picks the heading template. A missing or blank template falls back to the
/// format's default.
pub(super) fn resolve_heading(
    heading: Option<String>,
    format: OutputFormat,
    diag: Diagnostics,
) -> String {
    match heading.filter(|h| !h.trim().is_empty()) {
        Some(template) => {
            if !template.contains(FILE_PLACEHOLDER) {
                diag.debug(format!(
                    "Heading template '{}' has no {} placeholder; it will repeat verbatim",
                    template, FILE_PLACEHOLDER
                ));
            }
            template
        }
        None => format.default_heading().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_path("./src/../lib", Path::new("/work/app")),
            PathBuf::from("/work/app/lib")
        );
        assert_eq!(resolve_path(".", Path::new("/work/app")), PathBuf::from("/work/app"));
    }

    #[test]
    fn test_resolve_absolute_path_ignores_cwd() {
        assert_eq!(
            resolve_path("/elsewhere/src", Path::new("/work/app")),
            PathBuf::from("/elsewhere/src")
        );
    }

    #[test]
    fn test_blank_heading_uses_format_default() {
        let diag = Diagnostics::silent();
        assert_eq!(resolve_heading(None, OutputFormat::Md, diag), "### {file}");
        assert_eq!(
            resolve_heading(Some("  ".to_string()), OutputFormat::Plain, diag),
            "// --- {file} ---"
        );
        assert_eq!(
            resolve_heading(Some("## {file}".to_string()), OutputFormat::Plain, diag),
            "## {file}"
        );
    }
}
