pub mod engine;
pub mod layers;
pub mod legend;
pub mod mapper;
pub mod page;
pub mod pipeline;

pub use crate::domain::model::{FeatureLayers, SourceData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
