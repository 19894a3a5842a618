//! Display backend trait
//!
//! Hardware-agnostic interface to a monochrome pixel display. Concrete
//! implementations (SSD1306 over I2C, SH1106 over SPI, ...) live with
//! the board support code; everything in this crate draws through this
//! trait only.

/// Monochrome pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelColor {
    /// Pixel off (black on an OLED)
    Off,
    /// Pixel on
    On,
}

impl PixelColor {
    /// The opposite color
    pub fn inverted(self) -> Self {
        match self {
            PixelColor::Off => PixelColor::On,
            PixelColor::On => PixelColor::Off,
        }
    }
}

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Coordinates or dimensions outside the display area
    OutOfBounds,
    /// Display not initialized
    NotInitialized,
}

/// Hardware-agnostic interface to a monochrome pixel display
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Implementations buffer drawing internally; nothing is guaranteed to
/// reach the panel until [`flush`](Self::flush).
pub trait DisplayBackend {
    /// Display size in pixels as (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Fill the entire display with `color`
    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: PixelColor,
    ) -> Result<(), DisplayError>;

    /// Draw a horizontal line
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: PixelColor)
        -> Result<(), DisplayError>;

    /// Draw text with the built-in 6x8 cell font
    ///
    /// `scale` multiplies the cell size; tested with 1 and 2.
    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        scale: u8,
        color: PixelColor,
    ) -> Result<(), DisplayError>;

    /// Transfer the internal buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Check if the display is initialized and reachable
    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_inversion() {
        assert_eq!(PixelColor::On.inverted(), PixelColor::Off);
        assert_eq!(PixelColor::Off.inverted(), PixelColor::On);
    }
}
