use crate::core::layers::MapContext;
use crate::utils::error::Result;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

// Registers the precomputed layers with the widget; no data logic lives here.
const BOOTSTRAP_JS: &str = r#"
function buildOverlay(overlay) {
  const c = overlay.content;
  switch (c.kind) {
    case "clusteredMarkers": {
      const group = L.markerClusterGroup();
      c.markers.forEach(m => group.addLayer(L.marker(m.position).bindPopup(m.popup)));
      return group;
    }
    case "circles":
      return L.layerGroup(c.circles.map(m =>
        L.circle(m.center, Object.assign({ radius: m.radius }, m.style)).bindPopup(m.popup)));
    case "heatmap":
      return L.heatLayer(c.points, c.options);
    case "geoJson":
      return L.geoJSON(c.data, { style: c.style });
  }
}

const ctx = JSON.parse(document.getElementById("map-data").textContent);
const baseLayers = {};
const overlayLayers = {};
const initial = [];

ctx.layerControl.baseLayers.forEach(b => {
  const layer = L.tileLayer(b.provider.urlTemplate, { attribution: b.provider.attribution });
  baseLayers[b.name] = layer;
  if (b.active) initial.push(layer);
});
ctx.layerControl.overlays.forEach(o => {
  const layer = buildOverlay(o);
  overlayLayers[o.name] = layer;
  if (o.active) initial.push(layer);
});

const map = L.map(ctx.containerId, { center: ctx.center, zoom: ctx.zoom, layers: initial });
L.control.layers(baseLayers, overlayLayers).addTo(map);

const legend = L.control({ position: ctx.legend.position });
legend.onAdd = function () {
  const div = L.DomUtil.create("div", "info legend");
  div.innerHTML = document.getElementById("legend-html").innerHTML;
  return div;
};
legend.addTo(map);
"#;

const LEGEND_CSS: &str = r#"
html, body { height: 100%; margin: 0; }
.map-container { height: 100%; }
.legend { background: white; padding: 6px 10px; line-height: 18px; color: #555; border-radius: 5px; }
.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.9; }
"#;

/// Serializes the context for a `<script type="application/json">` block.
/// `<`, `>` and `&` only ever appear inside JSON strings, so they are written
/// as unicode escapes and feed text can never open or close markup.
pub fn embed_json(context: &MapContext) -> Result<String> {
    let json = serde_json::to_string(context)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

pub fn render_page(context: &MapContext) -> Result<String> {
    let data = embed_json(context)?;
    let container_id = tera::escape_html(&context.container_id);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Earthquakes</title>
  <link rel="stylesheet" href="{leaflet_css}">
  <link rel="stylesheet" href="{cluster_css}">
  <link rel="stylesheet" href="{cluster_default_css}">
  <style>{style}</style>
</head>
<body>
  <div id="{container_id}" class="map-container"></div>
  <template id="legend-html">{legend}</template>
  <script type="application/json" id="map-data">{data}</script>
  <script src="{leaflet_js}"></script>
  <script src="{cluster_js}"></script>
  <script src="{heat_js}"></script>
  <script>{bootstrap}</script>
</body>
</html>
"#,
        leaflet_css = LEAFLET_CSS,
        cluster_css = CLUSTER_CSS,
        cluster_default_css = CLUSTER_DEFAULT_CSS,
        style = LEGEND_CSS,
        container_id = container_id,
        legend = context.legend.to_html(),
        data = data,
        leaflet_js = LEAFLET_JS,
        cluster_js = CLUSTER_JS,
        heat_js = HEAT_JS,
        bootstrap = BOOTSTRAP_JS,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layers::{assemble_layers, MapSettings};
    use crate::core::mapper::map_features;
    use crate::domain::model::{EarthquakeFeature, EventProperties, PointGeometry};

    fn context_with(place: &str, boundaries: Option<serde_json::Value>) -> MapContext {
        let layers = map_features(&[EarthquakeFeature {
            geometry: Some(PointGeometry {
                coordinates: [139.7, 35.7, 40.0],
            }),
            properties: EventProperties {
                place: Some(place.to_string()),
                mag: Some(4.0),
                time: 0,
                url: "https://example.com/jp".to_string(),
            },
        }]);
        let settings = MapSettings::default();
        MapContext::new(&settings, assemble_layers(layers, boundaries, &settings))
    }

    #[test]
    fn test_page_embeds_layers_and_legend() {
        let page = render_page(&context_with("Tokyo", None)).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<div id="map" class="map-container">"#));
        assert!(page.contains(LEAFLET_JS));
        assert!(page.contains(HEAT_JS));
        assert!(page.contains("\"clusteredMarkers\""));
        assert!(page.contains("\"fillColor\":\"#EECC00\""));
        assert!(page.contains("<h4>Legend</h4>"));
        assert!(page.contains("\"position\":\"bottomright\""));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let boundaries = serde_json::json!({"features": [
            {"properties": {"Name": "</script><script>alert(1)</script>"}},
            {"properties": {"Name": "<!--<script>"}},
            {"properties": {"Name": "AF & AN -->"}}
        ]});
        let context = context_with("Tokyo", Some(boundaries));
        let data = embed_json(&context).unwrap();
        assert!(!data.contains('<'));
        assert!(!data.contains('>'));
        assert!(!data.contains('&'));

        // still the same document once the escape is undone
        let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed, serde_json::to_value(&context).unwrap());
    }

    #[test]
    fn test_comment_opener_in_boundaries_does_not_swallow_scripts() {
        let boundaries = serde_json::json!({"features": [{"properties": {"Name": "<!--<script>"}}]});
        let page = render_page(&context_with("Tokyo", Some(boundaries))).unwrap();

        assert!(!page.contains("<!--<script>"));
        let data_start = page.find(r#"id="map-data">"#).unwrap();
        let data_end = data_start + page[data_start..].find("</script>").unwrap();
        assert!(!page[data_start..data_end].contains("<script"));
        assert!(page[data_end..].contains(LEAFLET_JS));
    }
}
