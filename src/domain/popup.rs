use crate::domain::model::{EventProperties, PointGeometry};
use chrono::{DateTime, Utc};
use tera::escape_html;

/// Display fields of one event, independent of any marker type.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupFields<'a> {
    pub place: Option<&'a str>,
    pub magnitude: Option<f64>,
    pub depth_km: f64,
    pub time_ms: i64,
    pub url: &'a str,
}

impl<'a> PopupFields<'a> {
    pub fn from_event(geometry: &PointGeometry, properties: &'a EventProperties) -> Self {
        Self {
            place: properties.place.as_deref(),
            magnitude: properties.mag,
            depth_km: geometry.depth_km(),
            time_ms: properties.time,
            url: &properties.url,
        }
    }
}

pub fn format_popup(fields: &PopupFields<'_>) -> String {
    let place = fields.place.unwrap_or("Unknown location");
    let magnitude = fields
        .magnitude
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "<h3>{}</h3>Magnitude: {}<br/>Depth: {} km<br/>Time: {}<br/>Details: <a href=\"{}\">USGS Event Link</a>",
        escape_html(place),
        magnitude,
        fields.depth_km,
        format_event_time(fields.time_ms),
        escape_html(fields.url),
    )
}

/// `Thu Oct 16 2025 10:00:00 UTC`, or `Invalid Date` when out of range.
pub fn format_event_time(time_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(time_ms)
        .map(|t| t.format("%a %b %d %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}
