//! Analysis modes and the register that tracks the active one.
//!
//! - [`analysis_mode::AnalysisMode`]: the fixed, ordered list of modes
//! - [`register::ModeRegister`]: the single active mode, cycled by the UI

pub mod analysis_mode;
pub mod register;
