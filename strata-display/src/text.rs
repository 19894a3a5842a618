//! Text measurement for the built-in font
//!
//! The font is the classic 6x8 pixel cell (5x7 glyph plus spacing), so
//! layout math never needs the display hardware.

/// Width of one font cell in pixels at scale 1
pub const FONT_CELL_WIDTH: u16 = 6;

/// Height of one font cell in pixels at scale 1
pub const FONT_CELL_HEIGHT: u16 = 8;

/// Measured text extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimension {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

/// Calculate the dimensions required to draw `text` at `scale`
pub fn text_bounds(text: &str, scale: u8) -> Dimension {
    let chars = text.chars().count() as u16;
    Dimension {
        width: chars * FONT_CELL_WIDTH * u16::from(scale),
        height: FONT_CELL_HEIGHT * u16::from(scale),
    }
}

/// X coordinate that centers `text` on a display of `display_width` pixels
///
/// Text wider than the display is pinned to x = 0.
pub fn centered_x(display_width: u16, text: &str, scale: u8) -> u16 {
    let width = text_bounds(text, scale).width;
    display_width.saturating_sub(width) / 2
}
