//! Shared screen chrome
//!
//! Title bar and clear helpers used by stock and host-defined screens.
//! Everything draws through [`DisplayBackend`]; callers decide when to
//! flush so a full layout can be pushed to the panel in one transfer.

use strata_core::ActivityMeta;

use crate::backend::{DisplayBackend, DisplayError, PixelColor};
use crate::text::{centered_x, text_bounds, FONT_CELL_HEIGHT};

/// Pixels between the title text and the separator line
const TITLE_GAP: u16 = 1;

/// Draw the title bar described by `meta` at the top of the display
///
/// Renders the optional home arrow at the left edge, the title centered
/// at `meta.title_font_scale()`, and a separator line underneath.
/// Returns the bar height in pixels so layouts can start below it; if
/// `meta` disables the title bar nothing is drawn and the height is 0.
pub fn draw_title_bar<D: DisplayBackend>(
    display: &mut D,
    meta: &ActivityMeta,
    flush: bool,
) -> Result<u16, DisplayError> {
    if !meta.show_title_bar() {
        return Ok(0);
    }

    let scale = meta.title_font_scale();
    let (width, _) = display.dimensions();
    let text_height = text_bounds(meta.title(), scale).height;
    let bar_height = text_height + TITLE_GAP + 1;

    display.fill_rect(0, 0, width, bar_height, PixelColor::Off)?;

    if meta.show_home_arrow() {
        // Arrow at the left edge, vertically centered in the text row
        let arrow_y = text_height.saturating_sub(FONT_CELL_HEIGHT) / 2;
        display.draw_text(0, arrow_y, "<", 1, PixelColor::On)?;
    }

    let title_x = centered_x(width, meta.title(), scale);
    display.draw_text(title_x, 0, meta.title(), scale, PixelColor::On)?;
    display.draw_hline(0, text_height + TITLE_GAP, width, PixelColor::On)?;

    if flush {
        display.flush()?;
    }
    Ok(bar_height)
}

/// Clear the whole screen to `color`
pub fn clear_screen<D: DisplayBackend>(
    display: &mut D,
    color: PixelColor,
    flush: bool,
) -> Result<(), DisplayError> {
    display.clear(color)?;
    if flush {
        display.flush()?;
    }
    Ok(())
}
