use crate::domain::style::DEPTH_BUCKETS;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub position: ControlPosition,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Depth color scale, shallowest first.
    pub fn depth_scale() -> Self {
        Self {
            title: "Legend".to_string(),
            position: ControlPosition::BottomRight,
            entries: DEPTH_BUCKETS
                .iter()
                .map(|bucket| LegendEntry {
                    color: bucket.color.to_string(),
                    label: bucket.label.to_string(),
                })
                .collect(),
        }
    }

    /// Inner markup of the legend panel.
    pub fn to_html(&self) -> String {
        let rows: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("<i style='background: {}'></i>{}", entry.color, entry.label))
            .collect();
        format!("<h4>{}</h4>{}", self.title, rows.join("<br/>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_scale_order() {
        let legend = Legend::depth_scale();
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["-10-10 km", "10-30 km", "30-50 km", "50-70 km", "70-90 km", "90+ km"]
        );
        assert_eq!(legend.entries[0].color, "#98EE00");
        assert_eq!(legend.entries[5].color, "#EA2C2C");
        assert_eq!(legend.position, ControlPosition::BottomRight);
    }

    #[test]
    fn test_legend_html() {
        let html = Legend::depth_scale().to_html();
        assert!(html.starts_with("<h4>Legend</h4><i style='background: #98EE00'></i>-10-10 km<br/>"));
        assert!(html.ends_with("<i style='background: #EA2C2C'></i>90+ km"));
        assert_eq!(html.matches("<br/>").count(), 5);
    }

    #[test]
    fn test_position_serializes_for_widget() {
        let value = serde_json::to_value(ControlPosition::BottomRight).unwrap();
        assert_eq!(value, serde_json::json!("bottomright"));
    }
}
