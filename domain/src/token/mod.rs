//! Tokenizer output as the console sees it.
//!
//! - [`entities::TokenRow`] / [`entities::ResultSet`]: one response, in input order
//! - [`display::display_surface`]: visible rendering of whitespace-only surfaces

pub mod display;
pub mod entities;
