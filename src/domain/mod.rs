// Domain layer: feed and layer models, style constants, popup formatting and ports.

pub mod model;
pub mod popup;
pub mod ports;
pub mod style;
