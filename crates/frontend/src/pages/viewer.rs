use dioxus::prelude::*;

use crate::components::map_view::MapView;

const MAP_IMAGE: Asset = asset!("/assets/map.svg");

#[component]
pub fn Viewer() -> Element {
    rsx! {
        div { class: "app",
            MapView {
                image_src: MAP_IMAGE.to_string(),
                alt: "Map".to_string(),
            }
            div { class: "hint",
                "Drag to pan \u{00b7} scroll to zoom \u{00b7} double-click to drop a marker"
            }
        }
    }
}
