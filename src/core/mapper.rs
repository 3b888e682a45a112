use crate::domain::model::{CircleOverlay, CircleStyle, EarthquakeFeature, FeatureLayers, PointMarker};
use crate::domain::popup::{format_popup, PopupFields};
use crate::domain::style::{
    color_for_depth, radius_for_magnitude, CIRCLE_FILL_OPACITY, CIRCLE_STROKE_COLOR,
};

/// Turns each located feature into a marker, a heat point and a circle.
///
/// Features without geometry are skipped in all three collections at once,
/// so index `i` of every collection always refers to the same event.
pub fn map_features(features: &[EarthquakeFeature]) -> FeatureLayers {
    let mut layers = FeatureLayers::default();
    let mut skipped = 0usize;

    for feature in features {
        let Some(geometry) = feature.geometry.as_ref() else {
            skipped += 1;
            continue;
        };

        let position = geometry.lat_lng();
        let popup = format_popup(&PopupFields::from_event(geometry, &feature.properties));

        layers.markers.push(PointMarker {
            position,
            popup: popup.clone(),
        });

        layers.heat_points.push(position);

        layers.circles.push(CircleOverlay {
            center: position,
            radius: radius_for_magnitude(feature.properties.mag.unwrap_or(0.0)),
            style: CircleStyle {
                color: CIRCLE_STROKE_COLOR.to_string(),
                fill_color: color_for_depth(geometry.depth_km()).to_string(),
                fill_opacity: CIRCLE_FILL_OPACITY,
            },
            popup,
        });
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} features without geometry", skipped);
    }

    layers
}
