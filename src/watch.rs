// src/watch.rs

//! Re-runs the pipeline whenever something under the scan root changes.
//!
//! Each run is independent: the config (and the transform it holds) is
//! resolved once, and nothing else carries over between runs. Bursts of
//! events are debounced into a single re-run.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::constants::WATCH_DEBOUNCE_MS;
use crate::errors::{Error, Result};
use crate::filtering::IgnoreMatcher;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How often the wait loop checks for cancellation while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why [`FileWatcher::wait_for_change`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Changed,
    Cancelled,
    /// The underlying watcher went away.
    Disconnected,
}

/// Recursive watcher over the scan root that ignores the configured globs and
/// the run's own output file.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    debounce: Duration,
    roots: Vec<PathBuf>,
    ignore: IgnoreMatcher,
    own_output: Vec<PathBuf>,
}

impl FileWatcher {
    /// Starts watching `config.request.root_directory`.
    ///
    /// # Errors
    /// Fails if the root cannot be watched (for example, it does not exist).
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_debounce(config, Duration::from_millis(WATCH_DEBOUNCE_MS))
    }

    pub fn with_debounce(config: &Config, debounce: Duration) -> Result<Self> {
        let root = &config.request.root_directory;
        let (tx, rx) = unbounded();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;
        watcher.watch(root, RecursiveMode::Recursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            debounce,
            roots: with_canonical(root),
            ignore: IgnoreMatcher::new(&config.request.ignore_patterns, config.diagnostics),
            own_output: config
                .destination
                .path()
                .map(|p| with_canonical(p))
                .unwrap_or_default(),
        })
    }

    /// Blocks until a relevant change has settled for the debounce period,
    /// or `token` is cancelled.
    pub fn wait_for_change(&self, token: &CancellationToken) -> WaitOutcome {
        let mut deadline: Option<Instant> = None;
        loop {
            if token.is_cancelled() {
                return WaitOutcome::Cancelled;
            }
            match self.receiver.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) => {
                    if self.is_relevant(&event) {
                        deadline = Some(Instant::now() + self.debounce);
                    }
                }
                Ok(Err(e)) => log::warn!("File watch error: {}", e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return WaitOutcome::Disconnected,
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return WaitOutcome::Changed;
            }
        }
    }

    /// Create, modify, and remove events count unless every path they touch
    /// is ignored or is the run's own output.
    pub fn is_relevant(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| !self.is_excluded(p))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.own_output.iter().any(|out| out == path) {
            return true;
        }
        match self.roots.iter().find_map(|root| path.strip_prefix(root).ok()) {
            Some(relative) => self.ignore.is_ignored(relative),
            None => self.ignore.is_ignored(path),
        }
    }
}

/// `path` plus its canonical form when that differs. Watch backends may
/// report either.
fn with_canonical(path: &Path) -> Vec<PathBuf> {
    let mut variants = vec![path.to_path_buf()];
    let canonical = path.canonicalize().ok().or_else(|| {
        let parent = path.parent()?.canonicalize().ok()?;
        Some(parent.join(path.file_name()?))
    });
    if let Some(canonical) = canonical {
        if canonical != path {
            variants.push(canonical);
        }
    }
    variants
}

/// Runs the pipeline once, then again after every change until `token` is
/// cancelled.
///
/// A failing run is logged and watching continues.
///
/// # Errors
/// Returns [`Error::Interrupted`] once cancelled, or a watcher error if the
/// root cannot be watched.
pub fn watch(config: &Config, token: &CancellationToken) -> Result<()> {
    let diag = config.diagnostics;
    let watcher = FileWatcher::new(config)?;

    run_logged(config);
    diag.info("👀 Watching...");

    loop {
        match watcher.wait_for_change(token) {
            WaitOutcome::Changed => {
                diag.debug("Change detected, re-running");
                run_logged(config);
            }
            WaitOutcome::Cancelled => return Err(Error::Interrupted),
            WaitOutcome::Disconnected => {
                diag.warn("File watcher stopped unexpectedly.");
                return Ok(());
            }
        }
    }
}

fn run_logged(config: &Config) {
    if let Err(e) = crate::run(config) {
        log::error!("❌ Runtime error: {}", e);
    }
}
