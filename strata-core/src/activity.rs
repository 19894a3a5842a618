//! Activity capability set
//!
//! An [`Activity`] is one navigable screen. Its lifecycle is driven
//! entirely by the runtime's stack operations; an activity never starts
//! or destroys itself directly. Navigation is requested through the
//! [`Context`] handle passed into every callback and takes effect as
//! soon as the callback returns, within the same loop iteration.

use alloc::boxed::Box;

use heapless::String;

use crate::bytestack::ResultBytes;

/// Maximum activity title length in characters
pub const MAX_TITLE_LEN: usize = 20;

/// Display metadata carried by every activity
///
/// The runtime never inspects this; it is consumed by title-bar and
/// chrome drawing helpers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityMeta {
    title: String<MAX_TITLE_LEN>,
    show_title_bar: bool,
    title_font_scale: u8,
    show_home_arrow: bool,
}

impl ActivityMeta {
    /// Create metadata with the given title and default presentation
    /// (no title bar, font scale 2, no home arrow)
    ///
    /// Titles longer than [`MAX_TITLE_LEN`] are truncated.
    pub fn new(title: &str) -> Self {
        let mut stored = String::new();
        for ch in title.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        Self {
            title: stored,
            show_title_bar: false,
            title_font_scale: 2,
            show_home_arrow: false,
        }
    }

    /// Show the title bar with the given font scale (tested with 1 and 2)
    pub fn with_title_bar(mut self, font_scale: u8) -> Self {
        self.show_title_bar = true;
        self.title_font_scale = font_scale;
        self
    }

    /// Show an arrow indicating there is an activity underneath
    pub fn with_home_arrow(mut self) -> Self {
        self.show_home_arrow = true;
        self
    }

    /// Activity title
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Whether the title bar should be drawn
    pub fn show_title_bar(&self) -> bool {
        self.show_title_bar
    }

    /// Title bar font scale
    pub fn title_font_scale(&self) -> u8 {
        self.title_font_scale
    }

    /// Whether the home arrow should be drawn
    pub fn show_home_arrow(&self) -> bool {
        self.show_home_arrow
    }
}

/// A navigation request recorded by a callback
///
/// Opaque to hosts; the runtime consumes it via [`Context::take_request`].
pub enum NavRequest<D> {
    /// Push a new activity on top of the requester
    Push {
        /// The activity to push
        activity: Box<dyn Activity<D>>,
        /// Result key if the requester expects a result back
        result_key: Option<i8>,
    },
    /// Pop the current top activity
    Pop,
}

impl<D> NavRequest<D> {
    /// Returns true for push requests
    pub fn is_push(&self) -> bool {
        matches!(self, NavRequest::Push { .. })
    }

    /// Returns true for pop requests
    pub fn is_pop(&self) -> bool {
        matches!(self, NavRequest::Pop)
    }
}

/// Per-callback handle giving an activity access to the display and the
/// navigation primitives
///
/// A new context is created for every callback invocation. Navigation
/// requested here is applied by the runtime immediately after the
/// callback returns, still inside the same `run_once` call; within one
/// callback the last request wins.
pub struct Context<'a, D> {
    display: &'a mut D,
    nav: Option<NavRequest<D>>,
}

impl<'a, D> Context<'a, D> {
    /// Create a context over a display handle
    ///
    /// The runtime creates one per callback; hosts only need this to
    /// drive activity implementations directly in tests.
    pub fn new(display: &'a mut D) -> Self {
        Self { display, nav: None }
    }

    /// The display handle, for drawing
    pub fn display(&mut self) -> &mut D {
        self.display
    }

    /// Request that `activity` be pushed on top of the caller
    pub fn start_activity(&mut self, activity: Box<dyn Activity<D>>) {
        self.nav = Some(NavRequest::Push {
            activity,
            result_key: None,
        });
    }

    /// Request a push, expecting a result back under `key` when the new
    /// activity is dismissed
    ///
    /// The key is caller-chosen and opaque to the runtime; it is handed
    /// back unchanged in `on_activity_result`.
    pub fn start_activity_for_result(&mut self, activity: Box<dyn Activity<D>>, key: i8) {
        self.nav = Some(NavRequest::Push {
            activity,
            result_key: Some(key),
        });
    }

    /// Request that the calling activity be popped and destroyed
    ///
    /// The requester's `on_destroy` runs after this callback returns, so
    /// the callback may keep using its own state until it returns. A no-op
    /// if only the root activity remains. A push requested from a callback
    /// when the stack is already at `MAX_STACK_DEPTH` is dropped.
    ///
    /// [`MAX_STACK_DEPTH`]: crate::runtime::MAX_STACK_DEPTH
    pub fn stop_activity(&mut self) {
        self.nav = Some(NavRequest::Pop);
    }

    /// Take the recorded navigation request, if any
    pub fn take_request(&mut self) -> Option<NavRequest<D>> {
        self.nav.take()
    }
}

/// One navigable screen
///
/// All callbacks default to no-ops; concrete screens override the subset
/// they need. Callbacks are only ever invoked by the runtime, inside
/// `run_once` or the push/pop protocol, and run to completion before the
/// runtime continues.
///
/// An activity may draw only while it is the top of the stack (between
/// `on_start`/`on_resume` and the next `on_pause`/`on_destroy`); paused
/// activities must not touch the display.
pub trait Activity<D> {
    /// Display metadata (title, title bar, home arrow)
    fn meta(&self) -> &ActivityMeta;

    /// Called once, right after the activity is pushed onto the stack
    ///
    /// Implementations typically call [`draw_layout`](Self::draw_layout)
    /// here.
    fn on_start(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Called when the activity covering this one has been popped
    ///
    /// Runs after `on_activity_result` (if a result was expected), so
    /// one redraw can reflect both the result and the regained
    /// visibility.
    fn on_resume(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Called when a new activity is pushed on top of this one
    fn on_pause(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Called when this activity is popped, just before it is dropped
    fn on_destroy(&mut self) {}

    /// Click forwarded from the input device
    fn on_click(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Long click forwarded from the input device
    fn on_long_click(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Scroll forwarded from the input device; `distance` is signed
    fn on_scroll(&mut self, _ctx: &mut Context<'_, D>, _distance: i32) {}

    /// Serialize the outgoing result onto `bytes`
    ///
    /// Called while this activity is being popped, before `on_destroy`,
    /// and only if it was started with `start_activity_for_result`. The
    /// channel was reset just before this call. The types pushed here
    /// are an out-of-band contract with the receiving activity's
    /// `on_activity_result`.
    fn set_result(&mut self, _bytes: &mut ResultBytes) {}

    /// Receive the result of an activity this one started for result
    ///
    /// `key` is the value passed to `start_activity_for_result`. Values
    /// must be popped in the reverse order the dismissed activity pushed
    /// them.
    fn on_activity_result(
        &mut self,
        _ctx: &mut Context<'_, D>,
        _result: &mut ResultBytes,
        _key: i8,
    ) {
    }

    /// Draw this activity's full layout
    ///
    /// Invoked by the activity itself from `on_start`/`on_resume` and
    /// after input-driven state changes; the runtime never calls it.
    fn draw_layout(&mut self, _display: &mut D) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults() {
        let meta = ActivityMeta::new("Settings");
        assert_eq!(meta.title(), "Settings");
        assert!(!meta.show_title_bar());
        assert_eq!(meta.title_font_scale(), 2);
        assert!(!meta.show_home_arrow());
    }

    #[test]
    fn test_meta_builders() {
        let meta = ActivityMeta::new("Duration").with_title_bar(1).with_home_arrow();
        assert!(meta.show_title_bar());
        assert_eq!(meta.title_font_scale(), 1);
        assert!(meta.show_home_arrow());
    }

    #[test]
    fn test_meta_title_truncation() {
        let meta = ActivityMeta::new("A very long activity title indeed");
        assert_eq!(meta.title().len(), MAX_TITLE_LEN);
        assert_eq!(meta.title(), "A very long activity");
    }

    #[test]
    fn test_context_last_request_wins() {
        struct Dummy;
        let mut display = Dummy;
        let mut ctx: Context<'_, Dummy> = Context::new(&mut display);

        assert!(ctx.take_request().is_none());

        ctx.stop_activity();
        let req = ctx.take_request().unwrap();
        assert!(req.is_pop());
        // Taking the request clears the slot
        assert!(ctx.take_request().is_none());
    }
}
