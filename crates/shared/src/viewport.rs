//! Pan/zoom viewport mapping map space onto screen space.
//!
//! Screen space is container-relative CSS pixels. Map space is the unscaled,
//! untranslated pixel space of the background image.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 3.0;
pub const SCALE_STEP: f64 = 0.1;
pub const DEFAULT_SCALE: f64 = 1.0;

// Scale is kept on a grid of SCALE_STEP so repeated wheel ticks never drift.
const STEPS_PER_UNIT: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Direction of a single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Negative delta (scrolling up) zooms in; anything else zooms out.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }
}

/// Current pan offset and zoom scale.
///
/// `scale` is private so it can only ever hold a value inside
/// `[SCALE_MIN, SCALE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: Point,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Viewport {
    pub fn new(offset: Point, scale: f64) -> Self {
        Self {
            offset,
            scale: snap_scale(scale),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map space → screen space.
    pub fn to_screen(&self, map: Point) -> Point {
        map * self.scale + self.offset
    }

    /// Screen space → map space.
    pub fn to_map(&self, screen: Point) -> Point {
        (screen - self.offset) / self.scale
    }

    /// Apply one wheel tick. Zoom is anchored at the viewport origin, so the
    /// offset is left untouched. Returns whether the scale changed.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        let next = step_scale(self.scale, direction);
        if next == self.scale {
            return false;
        }
        self.scale = next;
        true
    }

    /// CSS transform for the background image (`transform-origin: 0 0`).
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// Move `scale` one step in `direction`, clamped to the allowed range.
pub fn step_scale(scale: f64, direction: ZoomDirection) -> f64 {
    let steps = (scale * STEPS_PER_UNIT).round();
    let steps = match direction {
        ZoomDirection::In => steps + 1.0,
        ZoomDirection::Out => steps - 1.0,
    };
    (steps / STEPS_PER_UNIT).clamp(SCALE_MIN, SCALE_MAX)
}

/// Clamp and snap an arbitrary scale onto the step grid.
fn snap_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return DEFAULT_SCALE;
    }
    ((scale * STEPS_PER_UNIT).round() / STEPS_PER_UNIT).clamp(SCALE_MIN, SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_default_viewport_is_identity() {
        let vp = Viewport::default();
        let p = Point::new(123.0, -45.5);
        assert!(approx(vp.to_screen(p), p));
        assert!(approx(vp.to_map(p), p));
    }

    #[test]
    fn test_to_screen_applies_scale_then_offset() {
        let vp = Viewport::new(Point::new(10.0, 20.0), 2.0);
        let s = vp.to_screen(Point::new(5.0, 7.0));
        assert!(approx(s, Point::new(20.0, 34.0)));
    }

    #[test]
    fn test_to_map_inverts_to_screen() {
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(-37.25, 912.5),
            Point::new(1e5, -1e4),
        ];
        for scale in [0.5, 0.7, 1.0, 1.3, 2.0, 3.0] {
            let vp = Viewport::new(Point::new(-13.5, 42.0), scale);
            for p in samples {
                let back = vp.to_map(vp.to_screen(p));
                assert!(
                    (back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6,
                    "round trip failed at scale {scale} for {p:?}: {back:?}"
                );
            }
        }
    }

    #[test]
    fn test_zoom_in_and_out_by_one_step() {
        let mut vp = Viewport::default();
        assert!(vp.zoom(ZoomDirection::In));
        assert!((vp.scale() - 1.1).abs() < EPS);
        assert!(vp.zoom(ZoomDirection::Out));
        assert!(vp.zoom(ZoomDirection::Out));
        assert!((vp.scale() - 0.9).abs() < EPS);
    }

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut vp = Viewport::default();
        for _ in 0..50 {
            vp.zoom(ZoomDirection::In);
        }
        assert_eq!(vp.scale(), SCALE_MAX);
        assert!(!vp.zoom(ZoomDirection::In), "zoom past max should be a no-op");
        assert_eq!(vp.scale(), SCALE_MAX);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut vp = Viewport::default();
        for _ in 0..50 {
            vp.zoom(ZoomDirection::Out);
        }
        assert_eq!(vp.scale(), SCALE_MIN);
        assert!(!vp.zoom(ZoomDirection::Out));
        assert_eq!(vp.scale(), SCALE_MIN);
    }

    #[test]
    fn test_zoom_does_not_move_offset() {
        let mut vp = Viewport::new(Point::new(33.0, -8.0), 1.0);
        vp.zoom(ZoomDirection::In);
        vp.zoom(ZoomDirection::In);
        assert_eq!(vp.offset, Point::new(33.0, -8.0));
    }

    #[test]
    fn test_zoom_from_max_back_to_default_is_exact() {
        // 20 steps up to 3.0 and 20 back down must land on 1.0, not 1.0000000002
        let mut vp = Viewport::default();
        for _ in 0..20 {
            vp.zoom(ZoomDirection::In);
        }
        for _ in 0..20 {
            vp.zoom(ZoomDirection::Out);
        }
        assert_eq!(vp.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_every_wheel_tick_moves_one_step_or_clamps() {
        // Deterministic pseudo-random walk over wheel directions
        let mut vp = Viewport::default();
        let mut seed: u32 = 0x9e37_79b9;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let dir = if seed & 1 == 0 {
                ZoomDirection::In
            } else {
                ZoomDirection::Out
            };
            let before = vp.scale();
            let changed = vp.zoom(dir);
            let after = vp.scale();
            assert!((SCALE_MIN..=SCALE_MAX).contains(&after));
            if changed {
                assert!(((after - before).abs() - SCALE_STEP).abs() < EPS);
            } else {
                let bound = if dir == ZoomDirection::In { SCALE_MAX } else { SCALE_MIN };
                assert_eq!(after, bound);
            }
        }
    }

    #[test]
    fn test_new_clamps_out_of_range_scale() {
        assert_eq!(Viewport::new(Point::ORIGIN, 10.0).scale(), SCALE_MAX);
        assert_eq!(Viewport::new(Point::ORIGIN, 0.0).scale(), SCALE_MIN);
        assert_eq!(Viewport::new(Point::ORIGIN, f64::NAN).scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_wheel_delta_sign() {
        assert_eq!(ZoomDirection::from_wheel_delta(-120.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_wheel_delta(120.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_wheel_delta(f64::NAN), ZoomDirection::Out);
    }

    #[test]
    fn test_css_transform_format() {
        let vp = Viewport::new(Point::new(12.0, -4.5), 2.0);
        assert_eq!(vp.css_transform(), "translate(12px, -4.5px) scale(2)");
    }
}
