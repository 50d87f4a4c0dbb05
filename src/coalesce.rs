//! Per-frame coalescing of pointer-move events.
//!
//! Moves arrive faster than the view repaints. Only the most recent position
//! is kept; older unapplied positions are overwritten, never queued. At most
//! one frame request is outstanding at a time.

#[cfg(test)]
#[path = "coalesce_test.rs"]
mod coalesce_test;

use crate::geometry::Point;

#[derive(Debug, Clone, Default)]
pub struct MoveCoalescer {
    pending: Option<Point>,
    frame_requested: bool,
    superseded: u64,
}

impl MoveCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest pointer position.
    ///
    /// Returns `true` when the caller must request a frame; `false` when one
    /// is already outstanding and will pick this position up.
    pub fn push(&mut self, point: Point) -> bool {
        if self.pending.replace(point).is_some() {
            self.superseded += 1;
        }
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Take the position to apply this frame, if any.
    pub fn take(&mut self) -> Option<Point> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// Drop any unapplied position. An outstanding frame request becomes a no-op.
    pub fn discard(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Positions overwritten before they were applied.
    #[must_use]
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}
