use crate::core::legend::Legend;
use crate::domain::model::{CircleOverlay, FeatureLayers, LatLng, PointMarker};
use crate::domain::style::{BOUNDARY_LINE_COLOR, BOUNDARY_LINE_WEIGHT};
use crate::utils::error::{MapError, Result};
use serde::{Deserialize, Serialize};

pub const MARKERS_OVERLAY: &str = "Markers";
pub const CIRCLES_OVERLAY: &str = "Circles";
pub const HEATMAP_OVERLAY: &str = "Heatmap";
pub const BOUNDARIES_OVERLAY: &str = "Tectonic Plates";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatOptions {
    pub radius: f64,
    pub max: f64,
    pub blur: f64,
}

impl Default for HeatOptions {
    fn default() -> Self {
        Self {
            radius: 50.0,
            max: 0.02,
            blur: 20.0,
        }
    }
}

/// View and visual settings that may be overridden from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub heat: HeatOptions,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: [40.7, -94.5],
            zoom: 3,
            heat: HeatOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileProvider {
    pub url_template: String,
    pub attribution: String,
}

impl TileProvider {
    pub fn street() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }

    pub fn topography() -> Self {
        Self {
            url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, \
                <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; \
                <a href=\"https://opentopomap.org\">OpenTopoMap</a> \
                (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseLayer {
    name: String,
    active: bool,
    provider: TileProvider,
}

impl BaseLayer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn provider(&self) -> &TileProvider {
        &self.provider
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OverlayContent {
    ClusteredMarkers { markers: Vec<PointMarker> },
    Heatmap { points: Vec<LatLng>, options: HeatOptions },
    Circles { circles: Vec<CircleOverlay> },
    GeoJson { data: serde_json::Value, style: LineStyle },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub name: String,
    pub active: bool,
    pub content: OverlayContent,
}

/// Base layers behave like radio buttons, overlays like checkboxes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerControl {
    base_layers: Vec<BaseLayer>,
    overlays: Vec<Overlay>,
}

impl LayerControl {
    pub fn base_layers(&self) -> &[BaseLayer] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn active_base(&self) -> &BaseLayer {
        // construction and select_base both keep exactly one flag set
        self.base_layers
            .iter()
            .find(|layer| layer.active)
            .unwrap_or(&self.base_layers[0])
    }

    pub fn select_base(&mut self, name: &str) -> Result<()> {
        if !self.base_layers.iter().any(|layer| layer.name == name) {
            return Err(MapError::UnknownLayerError {
                name: name.to_string(),
            });
        }
        for layer in &mut self.base_layers {
            layer.active = layer.name == name;
        }
        Ok(())
    }

    pub fn overlay(&self, name: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|overlay| overlay.name == name)
    }

    pub fn set_overlay(&mut self, name: &str, active: bool) -> Result<()> {
        let overlay = self
            .overlays
            .iter_mut()
            .find(|overlay| overlay.name == name)
            .ok_or_else(|| MapError::UnknownLayerError {
                name: name.to_string(),
            })?;
        overlay.active = active;
        Ok(())
    }

    pub fn active_overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(|overlay| overlay.active)
    }
}

/// Builds the layer control in its initial render state: `Street` base layer,
/// markers on, circles and heatmap off, boundaries on when present.
pub fn assemble_layers(
    layers: FeatureLayers,
    boundaries: Option<serde_json::Value>,
    settings: &MapSettings,
) -> LayerControl {
    let base_layers = vec![
        BaseLayer {
            name: "Street".to_string(),
            active: true,
            provider: TileProvider::street(),
        },
        BaseLayer {
            name: "Topography".to_string(),
            active: false,
            provider: TileProvider::topography(),
        },
    ];

    let FeatureLayers {
        markers,
        heat_points,
        circles,
    } = layers;

    let mut overlays = vec![
        Overlay {
            name: MARKERS_OVERLAY.to_string(),
            active: true,
            content: OverlayContent::ClusteredMarkers { markers },
        },
        Overlay {
            name: CIRCLES_OVERLAY.to_string(),
            active: false,
            content: OverlayContent::Circles { circles },
        },
        Overlay {
            name: HEATMAP_OVERLAY.to_string(),
            active: false,
            content: OverlayContent::Heatmap {
                points: heat_points,
                options: settings.heat.clone(),
            },
        },
    ];

    if let Some(data) = boundaries {
        overlays.push(Overlay {
            name: BOUNDARIES_OVERLAY.to_string(),
            active: true,
            content: OverlayContent::GeoJson {
                data,
                style: LineStyle {
                    color: BOUNDARY_LINE_COLOR.to_string(),
                    weight: BOUNDARY_LINE_WEIGHT,
                },
            },
        });
    }

    LayerControl {
        base_layers,
        overlays,
    }
}

/// The one map instance of a run, owned by whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapContext {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub layer_control: LayerControl,
    pub legend: Legend,
}

impl MapContext {
    pub fn new(settings: &MapSettings, layer_control: LayerControl) -> Self {
        Self {
            container_id: settings.container_id.clone(),
            center: settings.center,
            zoom: settings.zoom,
            layer_control,
            legend: Legend::depth_scale(),
        }
    }
}
