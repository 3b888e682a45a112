use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Drives a pipeline through extract, transform and load.
pub struct MapEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching map data...");
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} features{}",
            data.earthquakes.features.len(),
            if data.boundaries.is_some() {
                " and plate boundaries"
            } else {
                ""
            }
        );
        self.monitor.log_phase("Fetch");

        tracing::info!("Building layers...");
        let context = self.pipeline.transform(data).await?;
        tracing::info!(
            "Built {} overlays, {} active",
            context.layer_control.overlays().len(),
            context.layer_control.active_overlays().count()
        );
        self.monitor.log_phase("Build");

        tracing::info!("Writing map...");
        let output_path = self.pipeline.load(context).await?;
        tracing::info!("Map saved to: {}", output_path);
        self.monitor.log_phase("Write");
        self.monitor.log_summary();

        Ok(output_path)
    }
}
