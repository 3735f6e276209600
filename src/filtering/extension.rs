// src/filtering/extension.rs

use std::path::Path;

/// Checks whether a file name ends with one of the wanted extensions.
///
/// `extensions` must already be normalized (lowercase, no leading dot). An
/// empty list, or a list containing `*`, accepts every file. Comparison is
/// case-insensitive and suffix-based, so multi-part extensions such as `d.ts`
/// work as expected.
///
/// # Examples
///
/// ```
/// use tscribe::filtering::matches_extension;
/// use std::path::Path;
///
/// let ts = vec!["ts".to_string(), "tsx".to_string()];
/// assert!(matches_extension(Path::new("src/App.TSX"), &ts));
/// assert!(!matches_extension(Path::new("README.md"), &ts));
/// assert!(!matches_extension(Path::new("Makefile"), &ts));
///
/// // Empty list means "everything".
/// assert!(matches_extension(Path::new("README.md"), &[]));
/// ```
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() || extensions.iter().any(|e| e == "*") {
        return true;
    }

    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_lowercase(),
        None => return false,
    };

    extensions.iter().any(|ext| {
        file_name.len() > ext.len() + 1
            && file_name.ends_with(ext.as_str())
            && file_name.as_bytes()[file_name.len() - ext.len() - 1] == b'.'
    })
}
