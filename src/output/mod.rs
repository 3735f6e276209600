// src/output/mod.rs

//! Assembles the final payload from sorted files.
//!
//! [`render_sections`] reads every file (through the optional transform) and
//! pairs it with its heading. [`join_sections`] concatenates them with a blank
//! line in between. [`render_listing`] is the list-only alternative that never
//! reads file content. The payload is handed to [`writer::write_output`].

use crate::core_types::{CandidateFile, RenderedSection};
use crate::diagnostics::Diagnostics;
use crate::errors::Result;
use crate::paths::{display_path, to_slash};
use crate::processing::load_bodies;
use crate::processing::transform::ContentTransform;
use std::path::Path;

pub mod header;
pub mod writer;

use crate::constants::SECTION_SEPARATOR;
use header::render_heading;

/// Builds one section per file, in the order given.
///
/// Headings show each path relative to `cwd`. Reading or transform failures
/// abort the whole render.
pub fn render_sections(
    files: &[CandidateFile],
    heading_template: &str,
    cwd: &Path,
    transform: Option<&dyn ContentTransform>,
    diag: Diagnostics,
) -> Result<Vec<RenderedSection>> {
    let bodies = load_bodies(files, transform, diag)?;
    Ok(files
        .iter()
        .zip(bodies)
        .map(|(file, body)| RenderedSection {
            heading: render_heading(heading_template, &display_path(&file.absolute_path, cwd)),
            body,
        })
        .collect())
}

/// Joins sections with a single blank line between them.
///
/// No sections yields the empty string.
///
/// ```
/// use tscribe::core_types::RenderedSection;
/// use tscribe::output::join_sections;
///
/// let sections = vec![
///     RenderedSection { heading: "### a.ts".into(), body: "A".into() },
///     RenderedSection { heading: "### b.ts".into(), body: "B".into() },
/// ];
/// assert_eq!(join_sections(&sections), "### a.ts\n\nA\n\n### b.ts\n\nB");
/// assert_eq!(join_sections(&[]), "");
/// ```
pub fn join_sections(sections: &[RenderedSection]) -> String {
    sections
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Lists absolute `/`-separated paths, one per line.
pub fn render_listing(files: &[CandidateFile]) -> String {
    let mut listing = String::new();
    for file in files {
        listing.push_str(&to_slash(&file.absolute_path));
        listing.push('\n');
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::transform::FnTransform;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_plain_round_trip_has_one_banner_per_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("src"))?;
        let a = temp.path().join("src/a.ts");
        let b = temp.path().join("b.ts");
        fs::write(&a, "const a = 1;\n")?;
        fs::write(&b, "const b = 2;")?;

        let files = vec![CandidateFile::new(a), CandidateFile::new(b)];
        let sections = render_sections(
            &files,
            "// --- {file} ---",
            temp.path(),
            None,
            Diagnostics::silent(),
        )?;
        let output = join_sections(&sections);

        assert_eq!(
            output,
            "// --- src/a.ts ---\n\nconst a = 1;\n\n\n// --- b.ts ---\n\nconst b = 2;"
        );
        assert_eq!(output.matches("// --- ").count(), 2);
        Ok(())
    }

    #[test]
    fn test_transform_replaces_body_only() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("x.ts");
        fs::write(&path, "original")?;
        let marker = FnTransform::new("marker", |_: &str, _: &Path| Ok("REPLACED".to_string()));

        let sections = render_sections(
            &[CandidateFile::new(path)],
            "### {file}",
            temp.path(),
            Some(&marker),
            Diagnostics::silent(),
        )?;

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "### x.ts");
        assert_eq!(sections[0].body, "REPLACED");
        Ok(())
    }

    #[test]
    fn test_heading_outside_cwd_uses_parent_segments() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let cwd = temp.path().join("app");
        fs::create_dir(&cwd)?;
        let path = temp.path().join("lib.ts");
        fs::write(&path, "x")?;

        let sections = render_sections(
            &[CandidateFile::new(path)],
            "### {file}",
            &cwd,
            None,
            Diagnostics::silent(),
        )?;
        assert_eq!(sections[0].heading, "### ../lib.ts");
        Ok(())
    }

    #[test]
    fn test_empty_input_renders_empty_string() -> anyhow::Result<()> {
        let sections = render_sections(&[], "### {file}", Path::new("/"), None, Diagnostics::silent())?;
        assert!(sections.is_empty());
        assert_eq!(join_sections(&sections), "");
        Ok(())
    }

    #[test]
    fn test_listing_one_path_per_line() {
        let files = vec![
            CandidateFile::new(PathBuf::from("/p/b.ts")),
            CandidateFile::new(PathBuf::from("/p/a.ts")),
        ];
        assert_eq!(render_listing(&files), "/p/b.ts\n/p/a.ts\n");
        assert_eq!(render_listing(&[]), "");
    }
}
