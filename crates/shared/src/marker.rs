use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// The fixed set of glyphs a marker can use, in picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerIcon {
    LocationDot,
    LocationArrow,
    MyLocation,
    UserLocation,
    LocationOff,
    ArrowDown,
    DoubleArrowDown,
    DownIcon,
}

impl MarkerIcon {
    pub const ALL: [MarkerIcon; 8] = [
        MarkerIcon::LocationDot,
        MarkerIcon::LocationArrow,
        MarkerIcon::MyLocation,
        MarkerIcon::UserLocation,
        MarkerIcon::LocationOff,
        MarkerIcon::ArrowDown,
        MarkerIcon::DoubleArrowDown,
        MarkerIcon::DownIcon,
    ];

    /// Stable key, used for render keys and the `data-icon` attribute.
    pub fn key(self) -> &'static str {
        match self {
            MarkerIcon::LocationDot => "location-dot",
            MarkerIcon::LocationArrow => "location-arrow",
            MarkerIcon::MyLocation => "my-location",
            MarkerIcon::UserLocation => "user-location",
            MarkerIcon::LocationOff => "location-off",
            MarkerIcon::ArrowDown => "arrow-down",
            MarkerIcon::DoubleArrowDown => "double-arrow-down",
            MarkerIcon::DownIcon => "down-icon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerIcon::LocationDot => "Location pin",
            MarkerIcon::LocationArrow => "Direction arrow",
            MarkerIcon::MyLocation => "Crosshair",
            MarkerIcon::UserLocation => "Person",
            MarkerIcon::LocationOff => "Unavailable",
            MarkerIcon::ArrowDown => "Arrow down",
            MarkerIcon::DoubleArrowDown => "Double chevron",
            MarkerIcon::DownIcon => "Down",
        }
    }
}

impl std::fmt::Display for MarkerIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// An icon pinned to a map-space coordinate. Never edited after placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub position: Point,
    pub icon: MarkerIcon,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_lists_eight_distinct_icons() {
        let set: HashSet<MarkerIcon> = MarkerIcon::ALL.into_iter().collect();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_picker_order_starts_with_pin() {
        assert_eq!(MarkerIcon::ALL[0], MarkerIcon::LocationDot);
        assert_eq!(MarkerIcon::ALL[7], MarkerIcon::DownIcon);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = MarkerIcon::ALL.iter().map(|i| i.key()).collect();
        assert_eq!(keys.len(), MarkerIcon::ALL.len());
    }

    #[test]
    fn test_serde_name_matches_key() {
        for icon in MarkerIcon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.key()));
            let back: MarkerIcon = serde_json::from_str(&json).unwrap();
            assert_eq!(back, icon);
        }
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(MarkerIcon::DoubleArrowDown.to_string(), "double-arrow-down");
    }
}
