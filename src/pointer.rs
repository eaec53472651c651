// Latest known pointer position, written by the mousemove listener and read
// by every particle update. Both run on the browser's main thread, so a Cell
// is enough; readers may see the position from a previous frame.

use crate::point::{point, Point2D};
use std::cell::Cell;

pub struct PointerTracker {
    position: Cell<Point2D>,
}

impl PointerTracker {
    /// Off-screen sentinel used before the first pointer event, far enough
    /// that no particle feels any repulsion at startup.
    pub const OFF_SCREEN: f64 = -1000.0;

    pub fn new() -> PointerTracker {
        PointerTracker {
            position: Cell::new(point(PointerTracker::OFF_SCREEN, PointerTracker::OFF_SCREEN)),
        }
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.position.set(point(x, y));
    }

    pub fn position(&self) -> Point2D {
        self.position.get()
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        PointerTracker::new()
    }
}
