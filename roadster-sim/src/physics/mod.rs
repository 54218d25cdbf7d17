mod longitudinal;
pub mod steering;
pub mod vehicle_entity;


pub use vehicle_entity::{TickReport, Vehicle, VehicleState};
