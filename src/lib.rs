pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{engine::MapEngine, pipeline::QuakeMapPipeline};
pub use domain::style::{color_for_depth, radius_for_magnitude};
pub use utils::error::{MapError, Result};
