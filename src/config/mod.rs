pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::layers::MapSettings;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_EARTHQUAKE_ENDPOINT: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const DEFAULT_BOUNDARY_ENDPOINT: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
pub const OUTPUT_FORMATS: [&str; 2] = ["html", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quake-map")]
#[command(about = "Render the USGS earthquake feed as an interactive Leaflet map")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_EARTHQUAKE_ENDPOINT)]
    pub earthquake_endpoint: String,

    #[arg(long, default_value = DEFAULT_BOUNDARY_ENDPOINT)]
    pub boundary_endpoint: String,

    #[arg(long, help = "Add the tectonic plate boundary overlay")]
    pub plates: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "html,json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn earthquake_endpoint(&self) -> &str {
        &self.earthquake_endpoint
    }

    fn boundary_endpoint(&self) -> Option<&str> {
        self.plates.then_some(self.boundary_endpoint.as_str())
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn map_settings(&self) -> MapSettings {
        MapSettings::default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("earthquake_endpoint", &self.earthquake_endpoint)?;
        if self.plates {
            validation::validate_url("boundary_endpoint", &self.boundary_endpoint)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_allowed_values("formats", &self.formats, &OUTPUT_FORMATS)?;
        Ok(())
    }
}
