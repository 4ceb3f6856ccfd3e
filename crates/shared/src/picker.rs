use crate::marker::{MarkerIcon, PlacedMarker};
use crate::viewport::Point;

/// Icon picker lifecycle: `Hidden -> Visible -> Hidden`.
///
/// The anchor is stored in map space so the open menu follows the map when it
/// is panned or zoomed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible { anchor: Point },
}

impl PickerState {
    pub fn is_visible(&self) -> bool {
        matches!(self, PickerState::Visible { .. })
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            PickerState::Hidden => None,
            PickerState::Visible { anchor } => Some(*anchor),
        }
    }

    /// Show the picker at `anchor`. An already open picker moves there.
    pub fn open(&mut self, anchor: Point) {
        *self = PickerState::Visible { anchor };
    }

    /// Close the picker and build the marker for `icon`.
    /// Returns `None` if the picker was not open.
    pub fn choose(&mut self, icon: MarkerIcon) -> Option<PlacedMarker> {
        let anchor = self.anchor()?;
        *self = PickerState::Hidden;
        Some(PlacedMarker {
            position: anchor,
            icon,
        })
    }
}
