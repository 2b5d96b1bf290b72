//! Frame-cycling sprite animation
//!
//! Stores (frame index, last switch timestamp) and advances against an
//! injected millisecond clock, so tests never need to mock a wall clock.

use crate::atlas::SpriteId;

/// Cycles through a fixed frame sequence on a fixed delay
#[derive(Debug, Clone)]
pub struct Animation {
    frames: &'static [SpriteId],
    delay_ms: u64,
    frame_index: usize,
    last_switch_ms: u64,
}

impl Animation {
    pub fn new(delay_ms: u64, frames: &'static [SpriteId]) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            delay_ms,
            frame_index: 0,
            last_switch_ms: 0,
        }
    }

    /// Advance to the next frame (wrapping) once the delay has elapsed
    pub fn advance(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_switch_ms) > self.delay_ms {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            self.last_switch_ms = now_ms;
        }
    }

    /// The active frame
    pub fn current(&self) -> SpriteId {
        self.frames[self.frame_index]
    }
}
