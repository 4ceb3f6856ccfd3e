pub mod glyph;
pub mod icon_picker;
pub mod map_view;
pub mod marker_layer;
