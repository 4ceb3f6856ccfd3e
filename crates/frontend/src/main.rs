mod components;
mod coords;
mod pages;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        document::Title { "Map Viewer" }
        pages::viewer::Viewer {}
    }
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn main() {
    dioxus::logger::init(log_level()).expect("failed to initialize logger");
    launch(App);
}
