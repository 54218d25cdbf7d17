use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Discrete things that happen to a vehicle during a tick; audio and UI hang
// off these, and the vehicle never cares whether anybody is listening
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum VehicleEvent {
    EngineStarted,
    EngineStopped,
    AccelerateWithoutEngine,
    // the tick was skipped because dt was negative or not finite
    DegenerateTick { dt: f64 },
}

pub trait EventSink {
    fn notify(&mut self, event: VehicleEvent);
}

impl EventSink for () {
    fn notify(&mut self, _event: VehicleEvent) {}
}

impl EventSink for Vec<VehicleEvent> {
    fn notify(&mut self, event: VehicleEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: VehicleEvent) {
        (**self).notify(event);
    }
}

/// Forwards vehicle events to the `tracing` subscriber, tagged with a car name.
pub struct LogSink {
    pub car_name: String,
}

impl LogSink {
    pub fn new(car_name: impl Into<String>) -> Self {
        Self {
            car_name: car_name.into(),
        }
    }
}

impl EventSink for LogSink {
    fn notify(&mut self, event: VehicleEvent) {
        match event {
            VehicleEvent::EngineStarted => {
                info!(car = %self.car_name, "engine started! ready to drive")
            }
            VehicleEvent::EngineStopped => info!(car = %self.car_name, "engine stopped"),
            VehicleEvent::AccelerateWithoutEngine => {
                warn!(car = %self.car_name, "engine is off! start the engine first")
            }
            VehicleEvent::DegenerateTick { dt } => {
                warn!(car = %self.car_name, dt, "skipped tick with unusable frame time")
            }
        }
    }
}
