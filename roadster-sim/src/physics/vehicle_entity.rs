use roadster_core::entity_location::EntityLocation;
use roadster_core::player::player_inputs::{Intent, IntentBuffer, SteerDirection};
use roadster_core::vehicle_config::{VehicleConfig, VehicleConfigError};
use roadster_core::vehicle_event::{EventSink, VehicleEvent};

// km/h to m/s
const KMH_TO_MS: f64 = 1.0 / 3.6;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// Everything about a car that changes from frame to frame
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VehicleState {
    pub speed: f64, // km/h, never negative; there is no reverse gear
    pub engine_running: bool,
    pub steer: f64, // smoothed wheel position in [-1, 1]
    pub entity_location: EntityLocation,
}

impl VehicleState {
    pub fn at(entity_location: EntityLocation) -> VehicleState {
        VehicleState {
            entity_location,
            ..VehicleState::default()
        }
    }

    /* Given this frame's intent, compute and return what the car looks like
     * one frame later. A zero-length frame changes nothing; a negative or
     * non-finite one changes nothing either, but is reported */
    pub fn next(
        &self,
        config: &VehicleConfig,
        intent: &Intent,
        dt: f64,
        events: &mut impl EventSink,
    ) -> VehicleState {
        if !dt.is_finite() || dt < 0.0 {
            events.notify(VehicleEvent::DegenerateTick { dt });
            return *self;
        }
        if dt == 0.0 {
            return *self;
        }

        let mut next = *self;
        next.step_longitudinal(config, intent, dt, events);
        let yaw = next.step_steering(config, intent.steer_target(), dt);
        next.step_pose(dt, yaw);

        next.debug_assert_invariants(config);
        return next;
    }

    // drive forward along the current heading, then turn; the car always
    // moves where it was pointing at the start of the frame
    pub fn step_pose(&mut self, dt: f64, yaw: f64) {
        let location = self.entity_location;
        let travelled = location.forward() * (self.speed * KMH_TO_MS) * dt;

        self.entity_location = EntityLocation {
            position: location.position + travelled,
            heading: location.heading,
        }
        .rotated(yaw);
    }

    fn debug_assert_invariants(&self, config: &VehicleConfig) {
        debug_assert!(
            (0.0..=config.max_speed).contains(&self.speed),
            "speed {} escaped [0, {}]",
            self.speed,
            config.max_speed
        );
        debug_assert!(
            (-1.0..=1.0).contains(&self.steer),
            "steer {} escaped [-1, 1]",
            self.steer
        );
        debug_assert!(
            self.entity_location.heading > -180.0 && self.entity_location.heading <= 180.0,
            "heading {} not normalized",
            self.entity_location.heading
        );
    }
}

// What the host reads back after a tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub entity_location: EntityLocation,
    pub speed: f64,
    pub engine_running: bool,
}

/// One driver's car: fixed tuning, its runtime state and the requests
/// collected for the frame in progress.
#[derive(Debug)]
pub struct Vehicle {
    config: VehicleConfig,
    state: VehicleState,
    intents: IntentBuffer,
}

impl Vehicle {
    pub fn new(config: VehicleConfig) -> Result<Vehicle, VehicleConfigError> {
        Vehicle::at(config, EntityLocation::default())
    }

    pub fn at(
        config: VehicleConfig,
        entity_location: EntityLocation,
    ) -> Result<Vehicle, VehicleConfigError> {
        Vehicle::from_state(config, VehicleState::at(entity_location))
    }

    // Rebuild a car mid-drive (respawns, tests); out-of-range speed and
    // steering are pulled back into bounds, NaN and infinities become 0
    pub fn from_state(
        config: VehicleConfig,
        state: VehicleState,
    ) -> Result<Vehicle, VehicleConfigError> {
        let config = config.validated()?;
        let state = VehicleState {
            speed: finite_or_zero(state.speed).clamp(0.0, config.max_speed),
            steer: finite_or_zero(state.steer).clamp(-1.0, 1.0),
            entity_location: EntityLocation::new(
                state.entity_location.position,
                finite_or_zero(state.entity_location.heading),
            ),
            ..state
        };

        Ok(Vehicle {
            config,
            state,
            intents: IntentBuffer::new(),
        })
    }

    pub fn request_accelerate(&mut self) {
        self.intents.request_accelerate();
    }

    pub fn request_brake(&mut self) {
        self.intents.request_brake();
    }

    pub fn request_steer_left(&mut self) {
        self.intents.request_steer(SteerDirection::Left);
    }

    pub fn request_steer_right(&mut self) {
        self.intents.request_steer(SteerDirection::Right);
    }

    pub fn request_engine_toggle(&mut self) {
        self.intents.request_engine_toggle();
    }

    pub fn intents_mut(&mut self) -> &mut IntentBuffer {
        &mut self.intents
    }

    pub fn tick(&mut self, dt: f64) -> TickReport {
        self.tick_with(dt, &mut ())
    }

    /// Advances one frame, reporting engine and frame-time events to `events`.
    /// The frame's intent is consumed even when the tick turns out to be a no-op.
    pub fn tick_with(&mut self, dt: f64, events: &mut impl EventSink) -> TickReport {
        let intent = self.intents.drain();
        self.state = self.state.next(&self.config, &intent, dt, events);
        self.report()
    }

    pub fn report(&self) -> TickReport {
        TickReport {
            entity_location: self.state.entity_location,
            speed: self.state.speed,
            engine_running: self.state.engine_running,
        }
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn engine_running(&self) -> bool {
        self.state.engine_running
    }

    pub fn steer(&self) -> f64 {
        self.state.steer
    }

    pub fn entity_location(&self) -> EntityLocation {
        self.state.entity_location
    }
}
