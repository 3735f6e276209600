//! Provides a token-based mechanism for stopping the watch loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable, thread-safe stop flag.
///
/// The Ctrl+C handler cancels it; the watch loop polls it between events and
/// after every run.
///
/// # Examples
///
/// ```
/// use tscribe::CancellationToken;
/// use std::thread;
///
/// let token = CancellationToken::new();
/// let worker = token.clone();
///
/// let handle = thread::spawn(move || {
///     while !worker.is_cancelled() {
///         thread::yield_now();
///     }
/// });
///
/// token.cancel();
/// handle.join().unwrap();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this token and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
