use roadster_core::vehicle_config::VehicleConfig;

use super::vehicle_entity::VehicleState;

// below this magnitude the wheel counts as centered
pub const STEER_EPSILON: f64 = 1e-3;

// below this speed (km/h) the car is parked and steering does not yaw it
pub const MIN_TURNING_SPEED: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteerPhase {
    // no steering held; the wheel returns to center
    Centering,
    // steering held in the direction the wheel already points (or from center)
    Building,
    // steering held against the wheel; magnitude is snapped down before building
    Reversal,
}

impl SteerPhase {
    pub fn classify(steer: f64, target: f64) -> SteerPhase {
        if target == 0.0 {
            SteerPhase::Centering
        } else if steer.abs() > STEER_EPSILON && steer.signum() != target.signum() {
            SteerPhase::Reversal
        } else {
            SteerPhase::Building
        }
    }
}

/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_toward(current: f64, target: f64, max_delta: f64) -> f64 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

impl VehicleState {
    /* Smooth the steering wheel toward this frame's raw target and return the
     * yaw (in degrees) it produces. Smoothing always runs, but a parked car
     * does not rotate */
    pub fn step_steering(&mut self, config: &VehicleConfig, target: f64, dt: f64) -> f64 {
        let rate = match SteerPhase::classify(self.steer, target) {
            SteerPhase::Centering => config.steer_decel,
            SteerPhase::Building => config.steer_accel,
            SteerPhase::Reversal => {
                self.steer *= config.reverse_snap_factor;
                config.steer_accel
            }
        };

        self.steer = move_toward(self.steer, target, rate * dt).clamp(-1.0, 1.0);

        return self.yaw_for_frame(config, dt);
    }

    // negative yaw turns left, positive turns right
    pub fn yaw_for_frame(&self, config: &VehicleConfig, dt: f64) -> f64 {
        if self.steer.abs() <= STEER_EPSILON || self.speed <= MIN_TURNING_SPEED {
            return 0.0;
        }

        return self.steer * config.turn_speed * config.steer_intensity(self.speed) * dt;
    }
}
