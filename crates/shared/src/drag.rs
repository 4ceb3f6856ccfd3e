use crate::viewport::Point;

/// Pointer-drag tracking for panning.
///
/// While a drag is active, `grab` holds the pointer position relative to the
/// pan offset at the moment the button went down. Each move recomputes the
/// offset from it directly, so rounding never accumulates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    grab: Option<Point>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn start(&mut self, pointer: Point, offset: Point) {
        self.grab = Some(pointer - offset);
    }

    /// New absolute pan offset for `pointer`, or `None` when not dragging.
    pub fn offset_for(&self, pointer: Point) -> Option<Point> {
        self.grab.map(|grab| pointer - grab)
    }

    /// Returns whether a drag was actually in progress.
    pub fn release(&mut self) -> bool {
        self.grab.take().is_some()
    }
}
