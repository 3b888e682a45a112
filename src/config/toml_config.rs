use crate::config::{DEFAULT_BOUNDARY_ENDPOINT, DEFAULT_EARTHQUAKE_ENDPOINT, OUTPUT_FORMATS};
use crate::core::layers::{HeatOptions, MapSettings};
use crate::core::ConfigProvider;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub map: MapConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_earthquake_endpoint")]
    pub earthquake_endpoint: String,
    #[serde(default = "default_boundary_endpoint")]
    pub boundary_endpoint: String,
    #[serde(default)]
    pub include_boundaries: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            earthquake_endpoint: default_earthquake_endpoint(),
            boundary_endpoint: default_boundary_endpoint(),
            include_boundaries: false,
        }
    }
}

fn default_earthquake_endpoint() -> String {
    DEFAULT_EARTHQUAKE_ENDPOINT.to_string()
}

fn default_boundary_endpoint() -> String {
    DEFAULT_BOUNDARY_ENDPOINT.to_string()
}

/// Every field falls back to the built-in view when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: Option<String>,
    pub center: Option<[f64; 2]>,
    pub zoom: Option<u8>,
    pub heat_radius: Option<f64>,
    pub heat_max: Option<f64>,
    pub heat_blur: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    OUTPUT_FORMATS.iter().map(|f| f.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USGS_FEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn settings(&self) -> MapSettings {
        let defaults = MapSettings::default();
        let map = &self.map;
        MapSettings {
            container_id: map.container_id.clone().unwrap_or(defaults.container_id),
            center: map.center.unwrap_or(defaults.center),
            zoom: map.zoom.unwrap_or(defaults.zoom),
            heat: HeatOptions {
                radius: map.heat_radius.unwrap_or(defaults.heat.radius),
                max: map.heat_max.unwrap_or(defaults.heat.max),
                blur: map.heat_blur.unwrap_or(defaults.heat.blur),
            },
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn earthquake_endpoint(&self) -> &str {
        &self.source.earthquake_endpoint
    }

    fn boundary_endpoint(&self) -> Option<&str> {
        self.source
            .include_boundaries
            .then_some(self.source.boundary_endpoint.as_str())
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn map_settings(&self) -> MapSettings {
        self.settings()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.earthquake_endpoint", &self.source.earthquake_endpoint)?;
        if self.source.include_boundaries {
            validation::validate_url("source.boundary_endpoint", &self.source.boundary_endpoint)?;
        }

        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_allowed_values("output.formats", &self.output.formats, &OUTPUT_FORMATS)?;

        let settings = self.settings();
        validation::validate_non_empty_string("map.container_id", &settings.container_id)?;
        validation::validate_range("map.center[0]", settings.center[0], -90.0, 90.0)?;
        validation::validate_range("map.center[1]", settings.center[1], -180.0, 180.0)?;
        validation::validate_range("map.zoom", settings.zoom, 0, 19)?;
        validation::validate_range("map.heat_radius", settings.heat.radius, 1.0, 500.0)?;
        validation::validate_range("map.heat_blur", settings.heat.blur, 0.0, 500.0)?;
        if !(settings.heat.max > 0.0) {
            return Err(MapError::InvalidConfigValueError {
                field: "map.heat_max".to_string(),
                value: settings.heat.max.to_string(),
                reason: "Value must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_content = r#"
[output]
output_path = "./map-output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.earthquake_endpoint(), DEFAULT_EARTHQUAKE_ENDPOINT);
        assert_eq!(config.boundary_endpoint(), None);
        assert_eq!(config.output_formats(), &["html".to_string(), "json".to_string()]);
        assert_eq!(config.map_settings(), MapSettings::default());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[source]
earthquake_endpoint = "https://example.com/quakes.geojson"
boundary_endpoint = "https://example.com/plates.json"
include_boundaries = true

[map]
center = [35.0, 139.0]
zoom = 5
heat_radius = 25.0

[output]
output_path = "./out"
formats = ["html"]

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.map_settings();

        assert_eq!(config.boundary_endpoint(), Some("https://example.com/plates.json"));
        assert_eq!(settings.center, [35.0, 139.0]);
        assert_eq!(settings.zoom, 5);
        assert_eq!(settings.heat.radius, 25.0);
        assert_eq!(settings.heat.blur, 20.0);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUAKE_MAP_TEST_FEED", "https://test.feed.example");

        let toml_content = r#"
[source]
earthquake_endpoint = "${QUAKE_MAP_TEST_FEED}"

[output]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.earthquake_endpoint, "https://test.feed.example");

        std::env::remove_var("QUAKE_MAP_TEST_FEED");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = r#"
[source]
earthquake_endpoint = "invalid-url"

[output]
output_path = "./output"
"#;
        assert!(TomlConfig::from_toml_str(bad_url).unwrap().validate().is_err());

        let bad_zoom = r#"
[map]
zoom = 25

[output]
output_path = "./output"
"#;
        assert!(TomlConfig::from_toml_str(bad_zoom).unwrap().validate().is_err());

        let bad_format = r#"
[output]
output_path = "./output"
formats = ["pdf"]
"#;
        assert!(TomlConfig::from_toml_str(bad_format).unwrap().validate().is_err());
    }

    #[test]
    fn test_missing_output_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[source]\n").unwrap_err();
        assert!(matches!(err, MapError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
include_boundaries = true

[output]
output_path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.boundary_endpoint(), Some(DEFAULT_BOUNDARY_ENDPOINT));
    }
}
