//! Spinner shown while a one-shot request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Wraps an indicatif spinner on stderr.
///
/// Hidden when stderr is not a terminal or when quiet output is requested,
/// so piped output stays clean.
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(message.into());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Remove the spinner line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let spinner = RequestSpinner::start("Tokenizing", true);
        assert!(spinner.is_hidden());
        spinner.finish();
    }
}
