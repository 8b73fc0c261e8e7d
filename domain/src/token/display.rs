//! Display policy for token surfaces.

/// Glyph shown in place of a surface that is a single space (U+2423 OPEN BOX)
pub const SPACE_PLACEHOLDER: &str = "\u{2423}";

/// Surface text as it should appear on screen.
///
/// A surface that is exactly one ordinary space or one ideographic
/// (full-width) space would be invisible, so it is replaced by
/// [`SPACE_PLACEHOLDER`]. Every other surface is returned verbatim.
pub fn display_surface(surface: &str) -> &str {
    match surface {
        " " | "\u{3000}" => SPACE_PLACEHOLDER,
        other => other,
    }
}
