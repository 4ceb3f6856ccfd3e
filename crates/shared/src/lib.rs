pub mod drag;
pub mod marker;
pub mod picker;
pub mod state;
pub mod viewport;

pub use marker::{MarkerIcon, PlacedMarker};
pub use state::MapState;
pub use viewport::{Point, Viewport};
