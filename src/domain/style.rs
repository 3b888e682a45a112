//! Fixed visual constants and the two style functions derived from them.

/// One depth range of the color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBucket {
    /// Inclusive upper bound in km. `None` marks the terminal bucket.
    pub upper_bound: Option<f64>,
    pub color: &'static str,
    pub label: &'static str,
}

/// Ascending by depth; the last entry catches everything the others reject.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket {
        upper_bound: Some(10.0),
        color: "#98EE00",
        label: "-10-10 km",
    },
    DepthBucket {
        upper_bound: Some(30.0),
        color: "#D4EE00",
        label: "10-30 km",
    },
    DepthBucket {
        upper_bound: Some(50.0),
        color: "#EECC00",
        label: "30-50 km",
    },
    DepthBucket {
        upper_bound: Some(70.0),
        color: "#EE9C00",
        label: "50-70 km",
    },
    DepthBucket {
        upper_bound: Some(90.0),
        color: "#EA822C",
        label: "70-90 km",
    },
    DepthBucket {
        upper_bound: None,
        color: "#EA2C2C",
        label: "90+ km",
    },
];

pub const RADIUS_SCALE: f64 = 5000.0;

pub const CIRCLE_STROKE_COLOR: &str = "grey";
pub const CIRCLE_FILL_OPACITY: f64 = 0.5;

pub const BOUNDARY_LINE_COLOR: &str = "#C4A484";
pub const BOUNDARY_LINE_WEIGHT: f64 = 3.0;

/// Total over every `f64`: NaN fails all bounds and lands in the terminal bucket.
pub fn color_for_depth(depth: f64) -> &'static str {
    for bucket in &DEPTH_BUCKETS {
        match bucket.upper_bound {
            Some(bound) if depth <= bound => return bucket.color,
            Some(_) => continue,
            None => return bucket.color,
        }
    }
    DEPTH_BUCKETS[DEPTH_BUCKETS.len() - 1].color
}

/// Circle radius in meters. Zero and negative magnitudes are not rejected.
pub fn radius_for_magnitude(mag: f64) -> f64 {
    mag * mag * RADIUS_SCALE
}
