use dioxus::prelude::*;
use mapview_shared::MarkerIcon;

/// Rendered glyph edge length in CSS pixels.
const GLYPH_SIZE: f64 = 18.0;

/// Build the inline SVG for one icon. All glyphs share a 24×24 viewBox and
/// paint with `currentColor` so the surrounding CSS decides the color, except
/// `DownIcon`, which is a flat two-tone glyph.
pub fn glyph_svg(icon: MarkerIcon, size: f64) -> String {
    let body = match icon {
        MarkerIcon::LocationDot => {
            r#"<path fill="currentColor" d="M12 2a7 7 0 0 0-7 7c0 5.2 7 13 7 13s7-7.8 7-13a7 7 0 0 0-7-7zm0 9.5A2.5 2.5 0 1 1 12 6.5a2.5 2.5 0 0 1 0 5z"/>"#
        }
        MarkerIcon::LocationArrow => {
            r#"<path fill="currentColor" d="M21 3 3 10.5l7.2 2.3L12.5 20z"/>"#
        }
        MarkerIcon::MyLocation => {
            r#"<circle cx="12" cy="12" r="6.5" fill="none" stroke="currentColor" stroke-width="2"/><circle cx="12" cy="12" r="2.5" fill="currentColor"/><path stroke="currentColor" stroke-width="2" d="M12 1v4M12 19v4M1 12h4M19 12h4"/>"#
        }
        MarkerIcon::UserLocation => {
            r#"<path fill="none" stroke="currentColor" stroke-width="2" d="M12 2a7 7 0 0 0-7 7c0 5.2 7 13 7 13s7-7.8 7-13a7 7 0 0 0-7-7z"/><circle cx="12" cy="8" r="2.2" fill="currentColor"/><path fill="currentColor" d="M8.5 13.5c.6-1.6 2-2.5 3.5-2.5s2.9.9 3.5 2.5z"/>"#
        }
        MarkerIcon::LocationOff => {
            r#"<path fill="currentColor" d="M12 2a7 7 0 0 0-5.9 3.2l9.6 9.6C17.8 12.6 19 10.6 19 9a7 7 0 0 0-7-7zM5.1 7.3 5 9c0 5.2 7 13 7 13s1.9-2.1 3.8-4.9z"/><path stroke="currentColor" stroke-width="2" d="m3 3 18 18"/>"#
        }
        MarkerIcon::ArrowDown => {
            r#"<path fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" d="M12 5v14M6 13l6 6 6-6"/>"#
        }
        MarkerIcon::DoubleArrowDown => {
            r#"<path fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" d="m6 5 6 6 6-6M6 13l6 6 6-6"/>"#
        }
        MarkerIcon::DownIcon => {
            r##"<path fill="#3f51b5" d="M12 22 4 13h5V2h6v11h5z"/><path fill="#7986cb" d="M12 22 4 13h8z"/>"##
        }
    };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="{size}" height="{size}" aria-hidden="true">{body}</svg>"#
    )
}

#[component]
pub fn Glyph(icon: MarkerIcon) -> Element {
    let svg = glyph_svg(icon, GLYPH_SIZE);
    rsx! {
        span {
            class: "glyph",
            "data-icon": icon.key(),
            dangerous_inner_html: "{svg}",
        }
    }
}
