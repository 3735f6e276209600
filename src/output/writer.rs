// src/output/writer.rs

//! Delivers the rendered payload to its destination (stdout, file, or zip).
//!
//! Exactly one destination receives the payload per run. An empty payload is
//! still delivered: the output file or archive is created with empty content.

use crate::config::OutputDestination;
use crate::constants::DEFAULT_ARCHIVE_ENTRY_STEM;
use crate::core_types::OutputFormat;
use crate::diagnostics::Diagnostics;
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes `payload` to `destination`.
///
/// # Errors
/// Returns an error if the file or archive cannot be created or written.
pub fn write_output(
    payload: &str,
    destination: &OutputDestination,
    format: OutputFormat,
    diag: Diagnostics,
) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(payload.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| io_error_with_path(e, "<stdout>"))?;
        }
        OutputDestination::File(path) => {
            write_file(payload, path)?;
            diag.info(format!("✅ Written to {}", path.display()));
        }
        OutputDestination::Archive(path) => {
            write_archive(payload, path, format)?;
            diag.info(format!("📦 Zipped output to {}", path.display()));
        }
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `payload` to it.
fn write_file(payload: &str, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(payload.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, path))
}

/// Writes a zip archive at `path` holding one deflated entry with `payload`.
fn write_archive(payload: &str, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    zip.start_file(archive_entry_name(path, format), options)?;
    zip.write_all(payload.as_bytes())
        .map_err(|e| io_error_with_path(e, path))?;

    let mut inner = zip.finish()?;
    inner.flush().map_err(|e| io_error_with_path(e, path))?;
    Ok(())
}

/// Name of the single entry inside the archive: the archive's stem plus the
/// format's extension.
///
/// ```
/// use tscribe::core_types::OutputFormat;
/// use tscribe::output::writer::archive_entry_name;
/// use std::path::Path;
///
/// assert_eq!(archive_entry_name(Path::new("out/bundle.zip"), OutputFormat::Md), "bundle.md");
/// assert_eq!(archive_entry_name(Path::new("bundle.zip"), OutputFormat::Plain), "bundle.txt");
/// ```
pub fn archive_entry_name(archive_path: &Path, format: OutputFormat) -> String {
    let stem = archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ARCHIVE_ENTRY_STEM.to_string());
    format!("{}.{}", stem, format.file_extension())
}
