//! Provides the per-file content transform capability.
//!
//! A transform is resolved once at startup and then called as a pure
//! `(text, path) -> text` function for every rendered file. The built-in
//! loader turns a `--transform <PATH>` into a [`CommandTransform`]: the
//! executable receives the file path as its only argument, the file text on
//! stdin, and must print the replacement text on stdout.

use crate::diagnostics::Diagnostics;
use crate::errors::{Error, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

/// Rewrites a file's text before it is rendered.
pub trait ContentTransform: Send + Sync {
    /// Returns the replacement body for `content`, read from `path`.
    fn apply(&self, content: &str, path: &Path) -> Result<String>;
    /// Returns a descriptive name for diagnostics.
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn ContentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentTransform").field(&self.name()).finish()
    }
}

/// Adapts a closure into a [`ContentTransform`].
///
/// # Examples
///
/// ```
/// use tscribe::processing::transform::{ContentTransform, FnTransform};
/// use std::path::Path;
///
/// let upper = FnTransform::new("upper", |text: &str, _path: &Path| Ok(text.to_uppercase()));
/// assert_eq!(upper.apply("abc", Path::new("a.ts")).unwrap(), "ABC");
/// assert_eq!(upper.name(), "upper");
/// ```
pub struct FnTransform<F> {
    name: &'static str,
    func: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&str, &Path) -> Result<String> + Send + Sync,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> ContentTransform for FnTransform<F>
where
    F: Fn(&str, &Path) -> Result<String> + Send + Sync,
{
    fn apply(&self, content: &str, path: &Path) -> Result<String> {
        (self.func)(content, path)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Runs an external executable as the transform.
#[derive(Debug, Clone)]
pub struct CommandTransform {
    program: PathBuf,
    display: String,
}

impl CommandTransform {
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ContentTransform for CommandTransform {
    fn apply(&self, content: &str, path: &Path) -> Result<String> {
        let failure = |reason: String| Error::Transform {
            path: path.display().to_string(),
            reason,
        };

        let mut child = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| failure(format!("could not start '{}': {}", self.display, e)))?;

        // Feed stdin from a separate thread so a chatty child cannot deadlock us.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| failure("stdin was not captured".to_string()))?;
        let input = content.as_bytes().to_vec();
        let feeder = thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .map_err(|e| failure(format!("failed to wait for '{}': {}", self.display, e)))?;

        match feeder.join() {
            Ok(Ok(())) => {}
            // A transform may legitimately stop reading early.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(failure(format!("failed to write stdin: {}", e))),
            Err(_) => return Err(failure("stdin writer panicked".to_string())),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failure(format!(
                "'{}' exited with {}: {}",
                self.display,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| failure(format!("'{}' produced non-UTF-8 output", self.display)))
    }

    fn name(&self) -> &str {
        &self.display
    }
}

/// Resolves a transform path once, before any file is read.
///
/// Fails with [`Error::TransformLoad`] if the path does not exist, is not a
/// regular file, or (on Unix) is not executable.
pub fn load_transform(path: &Path, diag: Diagnostics) -> Result<Arc<dyn ContentTransform>> {
    let load_error = |reason: String| Error::TransformLoad {
        path: path.display().to_string(),
        reason,
    };

    let program = path
        .canonicalize()
        .map_err(|e| load_error(format!("cannot resolve path: {}", e)))?;
    let metadata = program
        .metadata()
        .map_err(|e| load_error(format!("cannot read metadata: {}", e)))?;
    if !metadata.is_file() {
        return Err(load_error("not a regular file".to_string()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(load_error("file is not executable".to_string()));
        }
    }

    diag.debug(format!("Loaded transform: {}", program.display()));
    Ok(Arc::new(CommandTransform {
        display: path.display().to_string(),
        program,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_transform_fails() {
        let result = load_transform(Path::new("/definitely/not/here/transform.sh"), Diagnostics::silent());
        match result {
            Err(Error::TransformLoad { reason, .. }) => {
                assert!(reason.contains("cannot resolve path"))
            }
            other => panic!("Expected TransformLoad, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_directory_fails() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = load_transform(temp.path(), Diagnostics::silent());
        assert!(matches!(result, Err(Error::TransformLoad { .. })));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_load_non_executable_fails() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let script = temp.path().join("t.sh");
        fs::write(&script, "#!/bin/sh\ncat\n")?;
        let result = load_transform(&script, Diagnostics::silent());
        match result {
            Err(Error::TransformLoad { reason, .. }) => assert!(reason.contains("not executable")),
            other => panic!("Expected TransformLoad, got {:?}", other.map(|_| ())),
        }
        Ok(())
    }

    #[cfg(unix)]
    fn executable_script(dir: &Path, name: &str, body: &str) -> anyhow::Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;
        let script = dir.join(name);
        fs::write(&script, body)?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    #[cfg(unix)]
    #[test]
    fn test_command_transform_rewrites_body() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let script = executable_script(
            temp.path(),
            "upper.sh",
            "#!/bin/sh\nprintf '/* %s */\\n' \"$(basename \"$1\")\"\ntr 'a-z' 'A-Z'\n",
        )?;
        let transform = load_transform(&script, Diagnostics::silent())?;
        let out = transform.apply("let x = 1;", Path::new("/src/a.ts"))?;
        assert_eq!(out, "/* a.ts */\nLET X = 1;");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_command_transform_failure_is_reported() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let script = executable_script(temp.path(), "fail.sh", "#!/bin/sh\necho nope >&2\nexit 3\n")?;
        let transform = load_transform(&script, Diagnostics::silent())?;
        let result = transform.apply("x", Path::new("a.ts"));
        match result {
            Err(Error::Transform { reason, .. }) => assert!(reason.contains("nope")),
            other => panic!("Expected Transform error, got {:?}", other),
        }
        Ok(())
    }
}
