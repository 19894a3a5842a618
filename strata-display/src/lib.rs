//! Display abstraction and stock screens for the Strata runtime
//!
//! This crate provides:
//! - `DisplayBackend` trait for monochrome pixel displays (OLED etc.)
//! - Text measurement for the 6x8 cell font
//! - Chrome helpers: title bar and screen clearing
//! - `DurationChooserActivity`, a stock screen returning a duration
//!
//! The runtime core (`strata-core`) treats the display as an opaque
//! handle; only the drawing code here requires `D: DisplayBackend`.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod chrome;
pub mod duration;
pub mod text;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{DisplayBackend, DisplayError, PixelColor};
pub use duration::DurationChooserActivity;
pub use text::{text_bounds, Dimension, FONT_CELL_HEIGHT, FONT_CELL_WIDTH};
