// src/signal.rs

//! Ctrl+C handling for watch mode.

use crate::cancellation::CancellationToken;
use crate::errors::Result;

/// Registers a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// Can only be called once per process.
///
/// # Errors
/// Returns [`Error::Signal`](crate::errors::Error::Signal) if a handler is
/// already installed or the platform refuses it.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received, stopping after the current run.");
        handler_token.cancel();
    })?;

    Ok(token)
}
