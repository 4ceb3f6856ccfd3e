use dioxus::prelude::*;
use mapview_shared::{MapState, MarkerIcon, Point};
use tracing::warn;

use crate::components::icon_picker::IconPicker;
use crate::components::marker_layer::MarkerLayer;
use crate::coords;

const MAP_CONTAINER_ID: &str = "map-view-container";

fn client_point(evt: &MouseData) -> Point {
    let client = evt.client_coordinates();
    Point::new(client.x, client.y)
}

fn image_style(transform: &str) -> String {
    format!("transform: {transform}; transform-origin: 0 0;")
}

fn zoom_percent(scale: f64) -> u32 {
    (scale * 100.0).round() as u32
}

fn marker_count_label(count: usize) -> String {
    if count == 1 {
        "1 marker".to_string()
    } else {
        format!("{count} markers")
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Pannable, zoomable map image. Double-click opens the icon picker; the chosen
/// icon is pinned at the map coordinate that was clicked.
#[component]
pub fn MapView(image_src: String, alt: String) -> Element {
    // Local to this instance; a second MapView gets its own markers.
    let mut state = use_signal(MapState::default);

    let (viewport, picker_at, placed, dragging) = {
        let s = state.read();
        (
            s.viewport(),
            s.picker_screen_position(),
            s.marker_screen_positions(),
            s.is_dragging(),
        )
    };

    let container_class = if dragging {
        "map-container dragging"
    } else {
        "map-container"
    };
    let transform_style = image_style(&viewport.css_transform());
    let zoom_label = format!("{}%", zoom_percent(viewport.scale()));
    let count_label = marker_count_label(placed.len());

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onmousedown: move |evt: Event<MouseData>| {
                state.write().pointer_down(client_point(&evt));
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !state.read().is_dragging() {
                    return;
                }
                state.write().pointer_move(client_point(&evt));
            },

            onmouseup: move |_| state.write().pointer_up(),

            onmouseleave: move |_| state.write().pointer_up(),

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                let Some(origin) = coords::container_origin(MAP_CONTAINER_ID) else {
                    warn!("map container not mounted; ignoring double-click");
                    return;
                };
                state.write().double_click(client_point(&evt), origin);
            },

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let delta_y = coords::wheel_delta_y(evt.data().delta());
                state.write().wheel(delta_y);
            },

            img {
                class: "map-image",
                src: "{image_src}",
                alt: "{alt}",
                draggable: "false",
                style: "{transform_style}",
            }

            if let Some(at) = picker_at {
                IconPicker {
                    at,
                    on_select: move |icon: MarkerIcon| {
                        state.write().select_icon(icon);
                    },
                }
            }

            MarkerLayer { placed }

            // Status readout (outside the transform so it stays fixed)
            div { class: "status-readout",
                span { class: "status-tag", "Zoom: {zoom_label}" }
                span { class: "status-tag", "{count_label}" }
            }
        }
    }
}
