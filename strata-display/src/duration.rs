//! Duration chooser screen
//!
//! Stock activity for picking a duration as hours/minutes/seconds.
//! Scrolling adjusts the highlighted field, a click moves the highlight
//! to the next field, and a click past the seconds field dismisses the
//! screen. Started for result, it returns the chosen duration in
//! seconds as a `u32`.

use core::fmt::Write;

use heapless::String;

use strata_core::{Activity, ActivityMeta, Context, ResultBytes};

use crate::backend::{DisplayBackend, PixelColor};
use crate::chrome;
use crate::text::{centered_x, text_bounds};

/// Font scale of the HH:MM:SS readout
const VALUE_SCALE: u8 = 2;

/// Number of editable fields (hours, minutes, seconds)
const VIEW_COUNT: u8 = 3;

/// Screen for choosing a duration, returned over the result channel
pub struct DurationChooserActivity {
    meta: ActivityMeta,
    hours: i8,
    minutes: i8,
    seconds: i8,
    /// Index of the highlighted field: 0 hours, 1 minutes, 2 seconds
    active_view: u8,
}

impl DurationChooserActivity {
    /// Create a chooser preset to `duration_s` seconds, with default
    /// presentation (no title bar)
    ///
    /// Durations longer than 99:59:59 are clamped.
    pub fn new(title: &str, duration_s: u32) -> Self {
        Self::with_meta(ActivityMeta::new(title), duration_s)
    }

    /// Create a chooser with explicit display metadata
    pub fn with_meta(meta: ActivityMeta, duration_s: u32) -> Self {
        let hours = (duration_s / 3600).min(99) as i8;
        let minutes = ((duration_s % 3600) / 60) as i8;
        let seconds = (duration_s % 60) as i8;
        Self {
            meta,
            hours,
            minutes,
            seconds,
            active_view: 0,
        }
    }

    /// Currently chosen duration in seconds
    pub fn duration(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    fn readout(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(
            text,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        );
        text
    }

    fn field_text(&self) -> String<2> {
        let value = match self.active_view {
            0 => self.hours,
            1 => self.minutes,
            _ => self.seconds,
        };
        let mut text = String::new();
        let _ = write!(text, "{value:02}");
        text
    }
}

fn wrap(value: i8, distance: i32, modulus: i32) -> i8 {
    (i32::from(value) + distance).rem_euclid(modulus) as i8
}

impl<D: DisplayBackend> Activity<D> for DurationChooserActivity {
    fn meta(&self) -> &ActivityMeta {
        &self.meta
    }

    fn on_start(&mut self, ctx: &mut Context<'_, D>) {
        self.draw_layout(ctx.display());
    }

    fn on_resume(&mut self, ctx: &mut Context<'_, D>) {
        self.draw_layout(ctx.display());
    }

    fn on_scroll(&mut self, ctx: &mut Context<'_, D>, distance: i32) {
        match self.active_view {
            0 => self.hours = wrap(self.hours, distance, 100),
            1 => self.minutes = wrap(self.minutes, distance, 60),
            _ => self.seconds = wrap(self.seconds, distance, 60),
        }
        self.draw_layout(ctx.display());
    }

    fn on_click(&mut self, ctx: &mut Context<'_, D>) {
        if self.active_view + 1 >= VIEW_COUNT {
            // Past the seconds field: the chosen duration is final
            ctx.stop_activity();
        } else {
            self.active_view += 1;
            self.draw_layout(ctx.display());
        }
    }

    fn set_result(&mut self, bytes: &mut ResultBytes) {
        let _ = bytes.push(self.duration());
    }

    fn draw_layout(&mut self, display: &mut D) {
        let _ = chrome::clear_screen(display, PixelColor::Off, false);
        let bar_height = chrome::draw_title_bar(display, &self.meta, false).unwrap_or(0);

        let readout = self.readout();
        let bounds = text_bounds(&readout, VALUE_SCALE);
        let (width, height) = display.dimensions();
        let x = centered_x(width, &readout, VALUE_SCALE);
        let body = height.saturating_sub(bar_height);
        let y = bar_height + body.saturating_sub(bounds.height) / 2;

        let _ = display.draw_text(x, y, &readout, VALUE_SCALE, PixelColor::On);

        // Highlight the active field by inverting its two digits
        let group_width = text_bounds("00:", VALUE_SCALE).width;
        let field = self.field_text();
        let field_bounds = text_bounds(&field, VALUE_SCALE);
        let field_x = x + u16::from(self.active_view) * group_width;
        let _ = display.fill_rect(field_x, y, field_bounds.width, bounds.height, PixelColor::On);
        let _ = display.draw_text(field_x, y, &field, VALUE_SCALE, PixelColor::Off);

        let _ = display.flush();
    }
}
