// src/constants.rs

/// Default heading template for Markdown output.
pub const MD_HEADING_TEMPLATE: &str = "### {file}";

/// Default heading template for plain-text output.
pub const PLAIN_HEADING_TEMPLATE: &str = "// --- {file} ---";

/// Placeholder replaced by the file's display path in heading templates.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Separator placed between rendered sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Default scan root, relative to the working directory.
pub const DEFAULT_SRC: &str = ".";

/// Default comma-separated extension list.
pub const DEFAULT_EXTENSIONS: &str = "ts,tsx";

/// Default comma-separated ignore list.
pub const DEFAULT_IGNORE: &str = "node_modules,dist,.git";

/// Config files looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["tscribe.config.toml", "tscribe.config.json"];

/// Stem used for the archive entry when the archive path has none.
pub const DEFAULT_ARCHIVE_ENTRY_STEM: &str = "output";

/// Quiet period after the last filesystem event before a watch re-run.
pub const WATCH_DEBOUNCE_MS: u64 = 200;
