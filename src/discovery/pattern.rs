// src/discovery/pattern.rs

//! Builds the recursive match pattern from a root and an extension list.

/// Splits a comma-separated extension specifier into normalized tokens.
///
/// Tokens are trimmed, lowercased and stripped of a leading `.`; empty tokens
/// are dropped.
///
/// ```
/// use tscribe::discovery::pattern::parse_extension_list;
///
/// assert_eq!(parse_extension_list(" TS, .tsx ,,"), vec!["ts", "tsx"]);
/// assert!(parse_extension_list("").is_empty());
/// ```
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|token| token.trim().trim_start_matches('.').to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Builds the match pattern for a root and a raw comma-separated extension
/// specifier. Performs no filesystem access.
///
/// `root` must already be absolute and `/`-separated. Glob metacharacters in
/// the root and in every extension are escaped, so `t?` only matches a literal
/// `.t?` suffix.
///
/// ```
/// use tscribe::discovery::pattern::build_pattern;
///
/// assert_eq!(build_pattern("/src", "*"), "/src/**/*");
/// assert_eq!(build_pattern("/src", "ts"), "/src/**/*.ts");
/// assert_eq!(build_pattern("/src", "ts, tsx"), "/src/**/*.{ts,tsx}");
/// ```
pub fn build_pattern(root: &str, list: &str) -> String {
    build_pattern_for(root, &parse_extension_list(list))
}

/// Same as [`build_pattern`], for an already-normalized extension list.
pub fn build_pattern_for(root: &str, extensions: &[String]) -> String {
    let root = globset::escape(root.trim_end_matches('/'));
    let wanted: Vec<String> = extensions
        .iter()
        .filter(|e| *e != "*")
        .map(|e| globset::escape(e))
        .collect();

    // A wildcard anywhere in the list widens the match to every file.
    if wanted.is_empty() || wanted.len() < extensions.len() {
        return format!("{}/**/*", root);
    }

    match wanted.as_slice() {
        [single] => format!("{}/**/*.{}", root, single),
        many => format!("{}/**/*.{{{}}}", root, many.join(",")),
    }
}
