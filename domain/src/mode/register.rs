//! Mode register: holds the single active [`AnalysisMode`].
//!
//! The register is owned by the input controller; nothing else mutates it.
//! The active mode is stored as an index into [`AnalysisMode::ALL`] so it is
//! always valid.

use super::analysis_mode::AnalysisMode;

/// The currently active analysis mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRegister {
    index: usize,
}

impl ModeRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active mode
    pub fn current_mode(&self) -> AnalysisMode {
        AnalysisMode::ALL[self.index]
    }

    /// Advance to the next mode, wrapping to the first after the last.
    pub fn cycle(&mut self) -> AnalysisMode {
        self.index = (self.index + 1) % AnalysisMode::ALL.len();
        self.current_mode()
    }

    /// Return to the first mode in the list.
    pub fn reset(&mut self) -> AnalysisMode {
        self.index = 0;
        self.current_mode()
    }

    /// Label of the active mode, for the mode indicator
    pub fn label(&self) -> &'static str {
        self.current_mode().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_mode() {
        assert_eq!(ModeRegister::new().current_mode(), AnalysisMode::Normal);
    }

    #[test]
    fn test_cycle_n_times_is_modular() {
        let len = AnalysisMode::ALL.len();
        for n in 0..10 {
            let mut register = ModeRegister::new();
            for _ in 0..n {
                register.cycle();
            }
            assert_eq!(register.current_mode().index(), n % len);
        }
    }

    #[test]
    fn test_cycle_returns_new_mode() {
        let mut register = ModeRegister::new();
        assert_eq!(register.cycle(), AnalysisMode::Search);
        assert_eq!(register.cycle(), AnalysisMode::Extended);
        assert_eq!(register.cycle(), AnalysisMode::Normal);
    }

    #[test]
    fn test_reset_from_any_state() {
        for n in 0..5 {
            let mut register = ModeRegister::new();
            for _ in 0..n {
                register.cycle();
            }
            assert_eq!(register.reset(), AnalysisMode::Normal);
            assert_eq!(register.current_mode(), AnalysisMode::Normal);
        }
    }

    #[test]
    fn test_label_follows_mode() {
        let mut register = ModeRegister::new();
        assert_eq!(register.label(), "normal mode");
        register.cycle();
        assert_eq!(register.label(), "search mode");
    }
}
