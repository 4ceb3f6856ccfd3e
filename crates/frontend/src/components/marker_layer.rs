use dioxus::prelude::*;
use mapview_shared::{MarkerIcon, Point};

use crate::components::glyph::Glyph;
use crate::coords;

/// Placed markers at their current container position, in placement order.
/// Each marker is centered on its anchor by the `.map-marker` CSS translate.
#[component]
pub fn MarkerLayer(placed: Vec<(Point, MarkerIcon)>) -> Element {
    rsx! {
        for (index, (at, icon)) in placed.into_iter().enumerate() {
            div {
                key: "{index}",
                class: "map-marker",
                title: icon.label(),
                style: coords::position_style(at),
                Glyph { icon }
            }
        }
    }
}
