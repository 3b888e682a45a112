use serde::{Deserialize, Serialize};

/// `[lat, lon]`, the order the map widget expects.
pub type LatLng = [f64; 2];

/// USGS summary feed. Only the feature list is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct EarthquakeFeed {
    pub features: Vec<EarthquakeFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EarthquakeFeature {
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    pub properties: EventProperties,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointGeometry {
    /// `[lon, lat, depth_km]`
    pub coordinates: [f64; 3],
}

impl PointGeometry {
    pub fn lat_lng(&self) -> LatLng {
        [self.coordinates[1], self.coordinates[0]]
    }

    pub fn depth_km(&self) -> f64 {
        self.coordinates[2]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventProperties {
    pub place: Option<String>,
    pub mag: Option<f64>,
    /// Epoch milliseconds.
    pub time: i64,
    pub url: String,
}

/// Everything fetched before any mapping happens.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub earthquakes: EarthquakeFeed,
    /// Opaque GeoJSON line collection, passed through untouched.
    pub boundaries: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMarker {
    pub position: LatLng,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleOverlay {
    pub center: LatLng,
    /// Meters.
    pub radius: f64,
    pub style: CircleStyle,
    pub popup: String,
}

/// The three per-feature collections. Index `i` of each refers to the same
/// source feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLayers {
    pub markers: Vec<PointMarker>,
    pub heat_points: Vec<LatLng>,
    pub circles: Vec<CircleOverlay>,
}

impl FeatureLayers {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_decodes_usgs_shape() {
        let raw = serde_json::json!({
            "type": "FeatureCollection",
            "metadata": {"count": 2},
            "features": [
                {
                    "type": "Feature",
                    "id": "nc1",
                    "geometry": {"type": "Point", "coordinates": [-122.4, 37.8, 12.0]},
                    "properties": {"place": "SF", "mag": 2.5, "time": 1700000000000i64,
                                   "url": "https://example.com/nc1", "felt": null}
                },
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": {"place": null, "mag": null, "time": 0, "url": "u"}
                }
            ]
        });

        let feed: EarthquakeFeed = serde_json::from_value(raw).unwrap();
        assert_eq!(feed.features.len(), 2);

        let geometry = feed.features[0].geometry.unwrap();
        assert_eq!(geometry.lat_lng(), [37.8, -122.4]);
        assert_eq!(geometry.depth_km(), 12.0);
        assert!(feed.features[1].geometry.is_none());
        assert!(feed.features[1].properties.mag.is_none());
    }

    #[test]
    fn test_missing_properties_is_malformed() {
        let raw = serde_json::json!({
            "features": [{"geometry": {"coordinates": [1.0, 2.0, 3.0]}}]
        });
        assert!(serde_json::from_value::<EarthquakeFeed>(raw).is_err());
    }

    #[test]
    fn test_two_coordinates_is_malformed() {
        let raw = serde_json::json!({
            "features": [{
                "geometry": {"coordinates": [1.0, 2.0]},
                "properties": {"place": "x", "mag": 1.0, "time": 0, "url": "u"}
            }]
        });
        assert!(serde_json::from_value::<EarthquakeFeed>(raw).is_err());
    }
}
