use dioxus::prelude::*;
use mapview_shared::{MarkerIcon, Point};

use crate::components::glyph::Glyph;
use crate::coords;

/// Menu of the fixed icon set, anchored with its top-left corner at `at`
/// (container coordinates). There is no close button; choosing an icon is the
/// only way out.
#[component]
pub fn IconPicker(at: Point, on_select: EventHandler<MarkerIcon>) -> Element {
    rsx! {
        div {
            class: "icon-picker",
            style: coords::position_style(at),
            ul {
                for icon in MarkerIcon::ALL {
                    li {
                        key: "{icon}",
                        title: icon.label(),
                        onclick: move |_| on_select.call(icon),
                        Glyph { icon }
                    }
                }
            }
        }
    }
}
