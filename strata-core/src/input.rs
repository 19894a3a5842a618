//! Input device boundary
//!
//! The runtime polls the input source exactly once per loop iteration.
//! A poll yields at most one event, which is forwarded verbatim to the
//! top-of-stack activity.

/// A single user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Short press
    Click,
    /// Long press (typically >= 1 s)
    LongClick,
    /// Rotation/scroll by a signed distance in detents
    Scroll(i32),
}

impl InputEvent {
    /// Returns true if this is a button event
    pub fn is_button(&self) -> bool {
        matches!(self, InputEvent::Click | InputEvent::LongClick)
    }

    /// Returns the scroll distance, or 0 for button events
    pub fn scroll_distance(&self) -> i32 {
        match self {
            InputEvent::Scroll(distance) => *distance,
            _ => 0,
        }
    }
}

/// Polling interface to the physical input device
///
/// Implementations debounce and classify the raw hardware themselves;
/// the runtime only ever sees classified events.
pub trait InputSource {
    /// Poll for a pending input event
    ///
    /// Returns `Some(event)` if the user produced input since the last
    /// poll, `None` otherwise. Called once per [`Runtime::run_once`]
    /// iteration and never concurrently.
    ///
    /// [`Runtime::run_once`]: crate::runtime::Runtime::run_once
    fn poll(&mut self) -> Option<InputEvent>;
}
