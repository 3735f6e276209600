// src/config/builder.rs

use super::file::{FileConfig, ListValue};
use super::parsing::{resolve_heading, resolve_path};
use super::{Config, OutputDestination};
use crate::cli::Cli;
use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_IGNORE, DEFAULT_SRC};
use crate::core_types::{OutputFormat, ScanRequest, SortMode};
use crate::diagnostics::Diagnostics;
use crate::discovery::pattern::parse_extension_list;
use crate::errors::{io_error_with_path, ConfigError, Result};
use crate::filtering::parse_ignore_list;
use crate::processing::transform::{load_transform, ContentTransform};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`Config`] programmatically or from the CLI.
///
/// Unset options fall back to the built-in defaults (`src = "."`,
/// `ext = "ts,tsx"`, `ignore = "node_modules,dist,.git"`, `format = md`,
/// `sort = path`).
///
/// # Examples
///
/// ```
/// use tscribe::config::{ConfigBuilder, OutputDestination};
/// use tscribe::core_types::SortMode;
///
/// let config = ConfigBuilder::new()
///     .working_directory("/work/app")
///     .src("src")
///     .extensions("ts, js")
///     .sort(SortMode::AlphabeticalBasename)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.request.root_directory, std::path::PathBuf::from("/work/app/src"));
/// assert_eq!(config.request.extensions, vec!["ts", "js"]);
/// assert_eq!(config.destination, OutputDestination::Stdout);
/// assert_eq!(config.heading_template, "### {file}");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) src: Option<String>,
    pub(super) out: Option<String>,
    pub(super) zip: Option<String>,
    pub(super) extensions: Option<String>,
    pub(super) ignore: Option<String>,
    pub(super) heading: Option<String>,
    pub(super) format: Option<OutputFormat>,
    pub(super) sort: Option<SortMode>,
    pub(super) list: Option<bool>,
    pub(super) watch: Option<bool>,
    pub(super) verbose: Option<bool>,
    pub(super) quiet: Option<bool>,
    pub(super) transform_path: Option<String>,
    pub(super) transform: Option<Arc<dyn ContentTransform>>,
    pub(super) no_fast_path: Option<bool>,
    pub(super) working_directory: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed CLI arguments. Flags that were not given
    /// stay unset so a config file can still supply them.
    pub fn from_cli(cli: Cli) -> Self {
        #[cfg(feature = "watch")]
        let watch = cli.watch.then_some(true);
        #[cfg(not(feature = "watch"))]
        let watch = None;

        Self {
            src: cli.src,
            out: cli.out,
            zip: cli.zip,
            extensions: cli.ext,
            ignore: cli.ignore,
            heading: cli.heading,
            format: cli.format,
            sort: cli.sort,
            list: cli.list.then_some(true),
            watch,
            verbose: cli.verbose.then_some(true),
            quiet: cli.quiet.then_some(true),
            transform_path: cli.transform,
            transform: None,
            no_fast_path: cli.no_fast_path.then_some(true),
            working_directory: None,
        }
    }

    /// Fills every option still unset from `file`.
    ///
    /// The destination is treated as one option: if either `out` or `zip` is
    /// already set, neither is taken from the file.
    pub fn merge_file_config(mut self, file: FileConfig) -> Self {
        if self.out.is_none() && self.zip.is_none() {
            self.out = file.out;
            self.zip = file.zip;
        }
        self.src = self.src.or(file.src);
        self.extensions = self.extensions.or(file.ext.map(ListValue::into_joined));
        self.ignore = self.ignore.or(file.ignore.map(ListValue::into_joined));
        self.heading = self.heading.or(file.heading);
        self.format = self.format.or(file.format);
        self.sort = self.sort.or(file.sort);
        self.list = self.list.or(file.list);
        self.watch = self.watch.or(file.watch);
        self.verbose = self.verbose.or(file.verbose);
        self.quiet = self.quiet.or(file.quiet);
        self.transform_path = self.transform_path.or(file.transform);
        self.no_fast_path = self.no_fast_path.or(file.no_fast_path);
        self
    }

    /// Loads the config file at `explicit`, or the first one found in the
    /// working directory, and merges it. No file found is not an error; an
    /// explicit path that cannot be read is.
    pub fn load_config_file(self, explicit: Option<&Path>) -> Result<Self> {
        let cwd = self.resolve_working_directory()?;
        let found = match explicit {
            Some(path) => Some(resolve_path(&path.to_string_lossy(), &cwd)),
            None => FileConfig::find_in(&cwd),
        };
        match found {
            Some(path) => {
                log::debug!("Loading config file: {}", path.display());
                let file = FileConfig::load(&path)?;
                Ok(self.merge_file_config(file))
            }
            None => Ok(self),
        }
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.out = Some(path.into());
        self
    }

    pub fn zip_file(mut self, path: impl Into<String>) -> Self {
        self.zip = Some(path.into());
        self
    }

    /// Comma-separated extensions; empty or `*` means all files.
    pub fn extensions(mut self, list: impl Into<String>) -> Self {
        self.extensions = Some(list.into());
        self
    }

    /// Comma-separated ignore globs.
    pub fn ignore(mut self, list: impl Into<String>) -> Self {
        self.ignore = Some(list.into());
        self
    }

    pub fn heading(mut self, template: impl Into<String>) -> Self {
        self.heading = Some(template.into());
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn sort(mut self, mode: SortMode) -> Self {
        self.sort = Some(mode);
        self
    }

    pub fn list_only(mut self, list: bool) -> Self {
        self.list = Some(list);
        self
    }

    pub fn watch(mut self, watch: bool) -> Self {
        self.watch = Some(watch);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    /// Path to an executable transform, loaded during [`build`](Self::build).
    pub fn transform_path(mut self, path: impl Into<String>) -> Self {
        self.transform_path = Some(path.into());
        self
    }

    /// Injects an already-constructed transform. Takes precedence over
    /// [`transform_path`](Self::transform_path).
    pub fn transform(mut self, transform: Arc<dyn ContentTransform>) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn no_fast_path(mut self, skip: bool) -> Self {
        self.no_fast_path = Some(skip);
        self
    }

    /// Base for relative options and heading paths. Defaults to the process's
    /// current directory.
    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Validates the options and builds the final [`Config`].
    ///
    /// The transform, if any, is loaded here, before any file is read.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for invalid combinations and
    /// [`Error::TransformLoad`](crate::errors::Error::TransformLoad) when the
    /// transform cannot be loaded.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;
        let cwd = self.resolve_working_directory()?;

        let diagnostics = Diagnostics::new(
            self.quiet.unwrap_or(false),
            self.verbose.unwrap_or(false),
        );
        let format = self.format.unwrap_or_default();

        let request = ScanRequest {
            root_directory: resolve_path(self.src.as_deref().unwrap_or(DEFAULT_SRC), &cwd),
            extensions: parse_extension_list(
                self.extensions.as_deref().unwrap_or(DEFAULT_EXTENSIONS),
            ),
            ignore_patterns: parse_ignore_list(Some(
                self.ignore.as_deref().unwrap_or(DEFAULT_IGNORE),
            )),
            sort_mode: self.sort.unwrap_or_default(),
        };

        let destination = match (&self.out, &self.zip) {
            (Some(out), _) => OutputDestination::File(resolve_path(out, &cwd)),
            (None, Some(zip)) => OutputDestination::Archive(resolve_path(zip, &cwd)),
            (None, None) => OutputDestination::Stdout,
        };

        let transform = match (self.transform, &self.transform_path) {
            (Some(injected), _) => Some(injected),
            (None, Some(path)) => Some(load_transform(&resolve_path(path, &cwd), diagnostics)?),
            (None, None) => None,
        };

        let config = Config {
            heading_template: resolve_heading(self.heading, format, diagnostics),
            request,
            format,
            list_only: self.list.unwrap_or(false),
            destination,
            transform,
            diagnostics,
            watch: self.watch.unwrap_or(false),
            fast_path: !self.no_fast_path.unwrap_or(false),
            working_directory: cwd,
        };

        diagnostics.debug(format!(
            "Resolved options: root={}, extensions={:?}, ignore={:?}, sort={}, format={:?}, destination={:?}",
            config.request.root_directory.display(),
            config.request.extensions,
            config.request.ignore_patterns,
            config.request.sort_mode,
            config.format,
            config.destination
        ));
        Ok(config)
    }

    fn resolve_working_directory(&self) -> Result<PathBuf> {
        match &self.working_directory {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir().map_err(|e| io_error_with_path(e, ".")),
        }
    }
}

/// Validates combinations of options on the `ConfigBuilder`.
fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.out.is_some() && builder.zip.is_some() {
        return Err(ConfigError::Conflict {
            option1: "--out".to_string(),
            option2: "--zip".to_string(),
        }
        .into());
    }
    if builder.src.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            option: "--src".to_string(),
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    for (option, value) in [("--out", &builder.out), ("--zip", &builder.zip)] {
        if value.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                option: option.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
