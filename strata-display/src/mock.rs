//! In-memory display recording drawing operations, for host tests

use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError, PixelColor};

const MAX_OPS: usize = 64;
const MAX_TEXT: usize = 24;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear(PixelColor),
    FillRect {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: PixelColor,
    },
    HLine {
        x: u16,
        y: u16,
        length: u16,
        color: PixelColor,
    },
    Text {
        x: u16,
        y: u16,
        text: String<MAX_TEXT>,
        scale: u8,
        color: PixelColor,
    },
    Flush,
}

/// Records every backend call in order
pub struct MockDisplay {
    pub ops: Vec<Op, MAX_OPS>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn record(&mut self, op: Op) -> Result<(), DisplayError> {
        self.ops.push(op).map_err(|_| DisplayError::OutOfBounds)
    }
}

impl DisplayBackend for MockDisplay {
    fn dimensions(&self) -> (u16, u16) {
        (128, 64)
    }

    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError> {
        self.record(Op::Clear(color))
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        self.record(Op::FillRect {
            x,
            y,
            width,
            height,
            color,
        })
    }

    fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        self.record(Op::HLine {
            x,
            y,
            length,
            color,
        })
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        scale: u8,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        let mut stored = String::new();
        for ch in text.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        self.record(Op::Text {
            x,
            y,
            text: stored,
            scale,
            color,
        })
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.record(Op::Flush)
    }
}
