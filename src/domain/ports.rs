use crate::core::layers::{MapContext, MapSettings};
use crate::domain::model::SourceData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn earthquake_endpoint(&self) -> &str;
    /// `None` when the tectonic boundary layer is disabled.
    fn boundary_endpoint(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn map_settings(&self) -> MapSettings;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, data: SourceData) -> Result<MapContext>;
    async fn load(&self, context: MapContext) -> Result<String>;
}
