use tracing::{debug, trace};

use crate::drag::DragState;
use crate::marker::{MarkerIcon, PlacedMarker};
use crate::picker::PickerState;
use crate::viewport::{Point, Viewport, ZoomDirection};

/// Everything the map view knows, owned by one component instance.
///
/// Each input event maps onto exactly one method. Pointer positions passed to
/// the drag methods are client coordinates; only their differences matter, so
/// the container origin cancels out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    viewport: Viewport,
    drag: DragState,
    picker: PickerState,
    markers: Vec<PlacedMarker>,
}

impl MapState {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn picker(&self) -> PickerState {
        self.picker
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, client: Point) {
        self.drag.start(client, self.viewport.offset);
        debug!(x = client.x, y = client.y, "drag started");
    }

    /// Pan while dragging. Returns whether the offset changed.
    pub fn pointer_move(&mut self, client: Point) -> bool {
        let Some(offset) = self.drag.offset_for(client) else {
            return false;
        };
        if offset == self.viewport.offset {
            return false;
        }
        self.viewport.offset = offset;
        trace!(x = offset.x, y = offset.y, "pan");
        true
    }

    /// Pointer released or left the container.
    pub fn pointer_up(&mut self) {
        if self.drag.release() {
            let offset = self.viewport.offset;
            debug!(x = offset.x, y = offset.y, "drag ended");
        }
    }

    /// One wheel tick; only the sign of `delta_y` matters.
    /// Returns whether the scale changed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let changed = self.viewport.zoom(ZoomDirection::from_wheel_delta(delta_y));
        if changed {
            debug!(scale = self.viewport.scale(), "zoom");
        }
        changed
    }

    /// Open the picker at the map coordinate under `client`.
    pub fn double_click(&mut self, client: Point, container_origin: Point) {
        let anchor = self.viewport.to_map(client - container_origin);
        self.picker.open(anchor);
        debug!(x = anchor.x, y = anchor.y, "picker opened");
    }

    /// Place `icon` at the picker's anchor and close the picker.
    /// Returns whether a marker was added.
    pub fn select_icon(&mut self, icon: MarkerIcon) -> bool {
        let Some(marker) = self.picker.choose(icon) else {
            return false;
        };
        self.markers.push(marker);
        debug!(
            icon = icon.key(),
            x = marker.position.x,
            y = marker.position.y,
            total = self.markers.len(),
            "marker placed"
        );
        true
    }

    /// Where the open picker's menu sits in container coordinates.
    pub fn picker_screen_position(&self) -> Option<Point> {
        self.picker.anchor().map(|anchor| self.viewport.to_screen(anchor))
    }

    /// Container coordinates of every placed marker, in placement order.
    pub fn marker_screen_positions(&self) -> Vec<(Point, MarkerIcon)> {
        self.markers
            .iter()
            .map(|m| (self.viewport.to_screen(m.position), m.icon))
            .collect()
    }
}
