//! Explicit quiet/verbose switches threaded through every pipeline stage.
//!
//! Stages never consult process-wide flags. They receive a [`Diagnostics`]
//! value and ask it whether a message should be emitted; the message itself
//! still goes through the `log` facade so the binary's subscriber decides
//! where it lands (stderr).

/// Quiet/verbose pair passed to every stage.
///
/// # Examples
///
/// ```
/// use tscribe::diagnostics::Diagnostics;
///
/// let diag = Diagnostics { quiet: false, verbose: true };
/// assert!(diag.info_enabled());
/// assert!(diag.debug_enabled());
///
/// let silent = Diagnostics { quiet: true, verbose: true };
/// assert!(!silent.info_enabled());
/// assert!(!silent.debug_enabled());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub quiet: bool,
    pub verbose: bool,
}

impl Diagnostics {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Suppresses everything but warnings and errors.
    pub fn silent() -> Self {
        Self {
            quiet: true,
            verbose: false,
        }
    }

    pub fn info_enabled(&self) -> bool {
        !self.quiet
    }

    pub fn debug_enabled(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Emits a progress/status line unless quiet.
    pub fn info(&self, msg: impl AsRef<str>) {
        if self.info_enabled() {
            log::info!("{}", msg.as_ref());
        }
    }

    /// Emits a decision trace line only in verbose mode.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.debug_enabled() {
            log::debug!("{}", msg.as_ref());
        }
    }

    /// Warnings are always emitted; quiet only silences chatter.
    pub fn warn(&self, msg: impl AsRef<str>) {
        log::warn!("{}", msg.as_ref());
    }

    /// Default directive for the log subscriber, derived from the same switches.
    pub fn default_filter(&self, crate_name: &str) -> String {
        let level = if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        };
        format!("{}={}", crate_name, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_verbose() {
        let diag = Diagnostics::new(true, true);
        assert!(!diag.info_enabled());
        assert!(!diag.debug_enabled());
        assert_eq!(diag.default_filter("tscribe"), "tscribe=warn");
    }

    #[test]
    fn test_default_levels() {
        let diag = Diagnostics::default();
        assert!(diag.info_enabled());
        assert!(!diag.debug_enabled());
        assert_eq!(diag.default_filter("tscribe"), "tscribe=info");
        assert_eq!(
            Diagnostics::new(false, true).default_filter("tscribe"),
            "tscribe=debug"
        );
    }
}
