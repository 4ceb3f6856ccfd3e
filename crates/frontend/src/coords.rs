use dioxus::html::geometry::WheelDelta;
use mapview_shared::Point;

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
#[cfg(test)]
pub fn client_to_container(client: Point, container_origin: Point) -> Point {
    client - container_origin
}

/// Top-left corner of the element with `container_id`, in client coordinates.
///
/// `None` while the element is not mounted (or outside a browser).
pub fn container_origin(container_id: &str) -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(rect.left(), rect.top()))
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
/// Only the sign is used downstream, but keeping magnitudes comparable makes
/// the value meaningful in logs.
pub fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Inline style placing an element at a container-relative point.
pub fn position_style(at: Point) -> String {
    format!("left: {}px; top: {}px;", at.x, at.y)
}
