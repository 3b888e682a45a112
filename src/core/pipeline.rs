use crate::core::layers::{assemble_layers, MapContext};
use crate::core::mapper::map_features;
use crate::core::page::render_page;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{EarthquakeFeed, SourceData};
use crate::utils::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const HTML_OUTPUT: &str = "index.html";
pub const JSON_OUTPUT: &str = "layers.json";

/// Fetches the feeds, builds the layer set and writes the rendered map.
pub struct QuakeMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> QuakeMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);

        Ok(serde_json::from_str(&body)?)
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuakeMapPipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        let earthquakes: EarthquakeFeed = self.fetch_json(self.config.earthquake_endpoint()).await?;
        tracing::info!("Fetched {} earthquake features", earthquakes.features.len());

        // 板塊邊界只在地震資料取得後才請求
        let boundaries = match self.config.boundary_endpoint() {
            Some(url) => {
                let data: serde_json::Value = self.fetch_json(url).await?;
                tracing::info!("Fetched tectonic boundary dataset");
                Some(data)
            }
            None => None,
        };

        Ok(SourceData {
            earthquakes,
            boundaries,
        })
    }

    async fn transform(&self, data: SourceData) -> Result<MapContext> {
        let settings = self.config.map_settings();

        let layers = map_features(&data.earthquakes.features);
        tracing::debug!(
            "Mapped {} of {} features into markers, heat points and circles",
            layers.len(),
            data.earthquakes.features.len()
        );

        let control = assemble_layers(layers, data.boundaries, &settings);
        Ok(MapContext::new(&settings, control))
    }

    async fn load(&self, context: MapContext) -> Result<String> {
        let mut written = Vec::new();

        if self.wants("html") {
            let page = render_page(&context)?;
            self.storage.write_file(HTML_OUTPUT, page.as_bytes()).await?;
            tracing::debug!("Wrote {} ({} bytes)", HTML_OUTPUT, page.len());
            written.push(HTML_OUTPUT);
        }

        if self.wants("json") {
            let json = serde_json::to_string_pretty(&context)?;
            self.storage.write_file(JSON_OUTPUT, json.as_bytes()).await?;
            tracing::debug!("Wrote {} ({} bytes)", JSON_OUTPUT, json.len());
            written.push(JSON_OUTPUT);
        }

        let primary = written.first().copied().unwrap_or(HTML_OUTPUT);
        Ok(Path::new(self.config.output_path())
            .join(primary)
            .to_string_lossy()
            .into_owned())
    }
}
