pub mod entity_location;
pub mod player;
pub mod vehicle_config;
pub mod vehicle_event;
mod settings;

pub use settings::{Settings, GLOBAL_CONFIG};
