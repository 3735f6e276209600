//! `tscribe` is a library and command-line tool that concatenates source files
//! into a single Markdown or plain-text document.
//!
//! As a library, it exposes the pipeline stage by stage:
//! 1.  **Discover**: find files by extension under a root, then drop anything
//!     matching the ignore globs.
//! 2.  **Sort**: order them by path, base name, or modification time.
//! 3.  **Render**: read each file (optionally through a transform) and join
//!     the sections, or list the paths only.
//! 4.  **Write**: deliver the payload to stdout, a file, or a zip archive.
//!
//! [`run`] chains all four, mirroring the command-line tool.
//!
//! # Example: Library Usage
//!
//! ```
//! use tscribe::{discover, render, sort, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("b.ts"), "export const b = 2;").unwrap();
//! fs::write(temp_dir.path().join("a.ts"), "export const a = 1;").unwrap();
//! fs::write(temp_dir.path().join("notes.md"), "not included").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .working_directory(temp_dir.path())
//!     .sort(tscribe::core_types::SortMode::AlphabeticalBasename)
//!     .quiet(true)
//!     .build()
//!     .unwrap();
//!
//! let report = discover(&config);
//! let files = sort(report.files, &config).unwrap();
//! let output = render(&files, &config).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "### a.ts\n\nexport const a = 1;\n\n### b.ts\n\nexport const b = 2;"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod diagnostics;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod paths;
pub mod processing;
pub mod sorting;

#[cfg(feature = "watch")]
pub mod cancellation;
#[cfg(feature = "watch")]
pub mod signal;
#[cfg(feature = "watch")]
pub mod watch;

pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{CandidateFile, RunSummary};
pub use discovery::DiscoveryReport;
pub use errors::{Error, Result};
pub use processing::transform::ContentTransform;

#[cfg(feature = "watch")]
pub use cancellation::CancellationToken;

use crate::discovery::{discover_files, StrategyChain};
use crate::filtering::apply_ignore_filter;
use crate::output::{join_sections, render_listing, render_sections};
use tracing::instrument;

/// Discovers candidate files and applies the ignore filter.
///
/// The ignore globs are re-applied after discovery, so the result does not
/// depend on which strategy produced it. Never fails: a missing root or a
/// failed recursive scan yields an empty report (see
/// [`DiscoveryReport::degraded`]).
pub fn discover(config: &Config) -> DiscoveryReport {
    let diag = config.diagnostics;
    let chain = if config.fast_path {
        StrategyChain::standard()
    } else {
        StrategyChain::recursive_only()
    };

    let mut report = discover_files(&config.request, &chain, diag);
    report.files = apply_ignore_filter(
        report.files,
        &config.request.ignore_patterns,
        &config.request.root_directory,
        diag,
    );
    report
}

/// Orders files according to the configured sort mode.
pub fn sort(files: Vec<CandidateFile>, config: &Config) -> Result<Vec<CandidateFile>> {
    sorting::sort_files(files, config.request.sort_mode, config.diagnostics)
}

/// Produces the output payload for already-sorted files.
///
/// In list mode this is one absolute path per line and no file is read.
/// Otherwise each file becomes a heading plus its (possibly transformed)
/// body, joined by blank lines. No files yields the empty string.
pub fn render(files: &[CandidateFile], config: &Config) -> Result<String> {
    if config.list_only {
        return Ok(render_listing(files));
    }
    let sections = render_sections(
        files,
        &config.heading_template,
        &config.working_directory,
        config.transform.as_deref(),
        config.diagnostics,
    )?;
    Ok(join_sections(&sections))
}

/// Executes the complete pipeline once: discover, sort, render, write.
///
/// Zero matching files is a success; the (empty) payload is still written.
///
/// # Errors
/// Propagates stat, read, transform, and write failures.
#[instrument(level = "debug", skip_all, fields(root = %config.request.root_directory.display()))]
pub fn run(config: &Config) -> Result<RunSummary> {
    let diag = config.diagnostics;

    let report = discover(config);
    let files = sort(report.files, config)?;
    let payload = render(&files, config)?;
    output::writer::write_output(&payload, &config.destination, config.format, diag)?;

    diag.info(format!("✅ Processed {} files.", files.len()));
    Ok(RunSummary {
        files_processed: files.len(),
        strategy: report.strategy,
        degraded: report.degraded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::SortMode;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_writes_file_destination() -> anyhow::Result<()> {
        let temp = tempdir()?;
        write(temp.path(), "src/a.ts", "A");
        write(temp.path(), "src/b.tsx", "B");
        let out = temp.path().join("bundle.md");

        let config = ConfigBuilder::new()
            .working_directory(temp.path())
            .output_file("bundle.md")
            .quiet(true)
            .build()?;
        let summary = run(&config)?;

        assert_eq!(summary.files_processed, 2);
        assert!(!summary.degraded);
        let text = fs::read_to_string(out)?;
        assert!(text.contains("### src/a.ts\n\nA"));
        assert!(text.contains("### src/b.tsx\n\nB"));
        Ok(())
    }

    #[test]
    fn test_ignore_applies_to_fast_path_results() -> anyhow::Result<()> {
        let temp = tempdir()?;
        write(temp.path(), "keep.ts", "k");
        write(temp.path(), "skip.gen.ts", "s");

        let config = ConfigBuilder::new()
            .working_directory(temp.path())
            .ignore("*.gen.ts")
            .quiet(true)
            .build()?;
        let report = discover(&config);

        assert_eq!(report.strategy, Some("direct listing"));
        let names: Vec<_> = report
            .files
            .iter()
            .map(|f| f.absolute_path.file_name().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["keep.ts"]);
        Ok(())
    }

    #[test]
    fn test_node_modules_excluded_by_either_strategy() -> anyhow::Result<()> {
        let temp = tempdir()?;
        write(temp.path(), "node_modules/x/y.ts", "dep");
        write(temp.path(), "src/app.ts", "app");

        for fast_path in [true, false] {
            let config = ConfigBuilder::new()
                .working_directory(temp.path())
                .ignore("node_modules/**")
                .no_fast_path(!fast_path)
                .quiet(true)
                .build()?;
            let files = discover(&config).files;
            assert_eq!(files.len(), 1);
            assert!(files[0].absolute_path.ends_with("src/app.ts"));
        }
        Ok(())
    }

    #[test]
    fn test_list_mode_reads_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        write(temp.path(), "b.ts", "b");
        write(temp.path(), "a.ts", "a");

        let config = ConfigBuilder::new()
            .working_directory(temp.path())
            .list_only(true)
            .sort(SortMode::AlphabeticalBasename)
            .quiet(true)
            .build()?;
        let files = sort(discover(&config).files, &config)?;
        let listing = render(&files, &config)?;

        let expected = format!(
            "{}\n{}\n",
            paths::to_slash(&temp.path().join("a.ts")),
            paths::to_slash(&temp.path().join("b.ts"))
        );
        assert_eq!(listing, expected);
        Ok(())
    }

    #[test]
    fn test_missing_root_still_writes_empty_artifact() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .working_directory(temp.path())
            .src("does-not-exist")
            .output_file("out.md")
            .quiet(true)
            .build()?;

        let summary = run(&config)?;
        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.strategy, None);
        assert_eq!(fs::read_to_string(temp.path().join("out.md"))?, "");
        Ok(())
    }
}
