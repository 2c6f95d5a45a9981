//! Ring radii for the navigation pie. Stored on each level, never read by statistics.

use serde::Serialize;

/// Radii (percent of the chart) describing the navigation rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center_max: f64,
    pub center_min: f64,
    pub gap_to_outside: f64,
    pub outside: f64,
    pub inside: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center_max: 20.0,
            center_min: 10.0,
            gap_to_outside: 5.0,
            outside: 15.0,
            inside: 5.0,
        }
    }
}

/// Layout parameters of one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingLayout {
    /// Outer radius of the parent's minimized ring; `0` for the root.
    pub parent_min_radius: f64,
    /// Expanded ring, drawn while this level is the outermost one.
    pub radius_max: [f64; 2],
    /// Minimized ring, drawn once a child has been selected.
    pub radius_min: [f64; 2],
}

impl RingLayout {
    pub fn new(parent_min_radius: f64, geometry: &RingGeometry) -> Self {
        if parent_min_radius == 0.0 {
            return Self::root(geometry);
        }
        let p = parent_min_radius;
        Self {
            parent_min_radius: p,
            radius_max: [
                p + geometry.gap_to_outside,
                p + geometry.gap_to_outside + geometry.outside,
            ],
            radius_min: [p, p + geometry.inside],
        }
    }

    pub fn root(geometry: &RingGeometry) -> Self {
        Self {
            parent_min_radius: 0.0,
            radius_max: [0.0, geometry.center_max],
            radius_min: [0.0, geometry.center_min],
        }
    }

    /// Parameter handed to this level's children.
    pub fn child_parameter(&self, geometry: &RingGeometry) -> f64 {
        if self.parent_min_radius == 0.0 {
            geometry.center_min
        } else {
            self.parent_min_radius + geometry.inside
        }
    }

    /// Percent strings as expected by chart options, e.g. `["25%", "40%"]`.
    pub fn as_percent(radii: [f64; 2]) -> [String; 2] {
        [format!("{}%", radii[0]), format!("{}%", radii[1])]
    }
}
