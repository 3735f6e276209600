//! Path helpers shared by discovery, filtering and output.

use std::path::{Component, Path, PathBuf};

/// Renders a path with `/` separators regardless of platform.
///
/// ```
/// use tscribe::paths::to_slash;
/// use std::path::Path;
///
/// assert_eq!(to_slash(Path::new("src/main.ts")), "src/main.ts");
/// ```
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Computes `path` relative to `base`, inserting `..` segments when `path`
/// lies outside `base`. Both inputs are expected to be absolute.
///
/// Returns `path` unchanged if the two share no common root (e.g. different
/// drive letters on Windows).
///
/// ```
/// use tscribe::paths::relative_to;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     relative_to(Path::new("/work/app/src/a.ts"), Path::new("/work/app")),
///     PathBuf::from("src/a.ts")
/// );
/// assert_eq!(
///     relative_to(Path::new("/work/lib/b.ts"), Path::new("/work/app")),
///     PathBuf::from("../lib/b.ts")
/// );
/// ```
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }

    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return path.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for part in &base_parts[common..] {
        if matches!(part, Component::Normal(_)) {
            relative.push("..");
        }
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}

/// Display path used in headings: relative to `cwd`, `/`-separated.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    to_slash(&relative_to(path, cwd))
}
