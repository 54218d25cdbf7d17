use roadster_core::player::player_inputs::Intent;
use roadster_core::vehicle_config::VehicleConfig;
use roadster_core::vehicle_event::{EventSink, VehicleEvent};

use super::vehicle_entity::VehicleState;

impl VehicleState {
    /* Apply this frame's engine toggle, throttle and brake to the forward
     * speed. Order matters: the toggle lands first (so a car can start and
     * pull away on the same frame), and brake is applied after throttle so
     * pressing both is deterministic */
    pub fn step_longitudinal(
        &mut self,
        config: &VehicleConfig,
        intent: &Intent,
        dt: f64,
        events: &mut impl EventSink,
    ) {
        if intent.toggle_engine {
            self.engine_running = !self.engine_running;
            if self.engine_running {
                events.notify(VehicleEvent::EngineStarted);
            } else {
                // killing the engine stops the car dead
                self.speed = 0.0;
                events.notify(VehicleEvent::EngineStopped);
            }
        }

        if intent.accelerate {
            if self.engine_running {
                self.speed = f64::min(self.speed + config.acceleration * dt, config.max_speed);
            } else {
                events.notify(VehicleEvent::AccelerateWithoutEngine);
            }
        }

        // brakes work whether or not the engine is running
        if intent.brake {
            self.speed = f64::max(self.speed - config.brake_force * dt, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use roadster_core::player::player_inputs::Intent;
    use roadster_core::vehicle_config::VehicleConfig;
    use roadster_core::vehicle_event::VehicleEvent;

    use crate::physics::vehicle_entity::VehicleState;

    fn running_at(speed: f64) -> VehicleState {
        VehicleState {
            speed,
            engine_running: true,
            ..VehicleState::default()
        }
    }

    #[test]
    fn test_accelerate_is_capped_at_max_speed() {
        let config = VehicleConfig::default();
        let mut state = running_at(295.0);
        let intent = Intent {
            accelerate: true,
            ..Intent::default()
        };

        state.step_longitudinal(&config, &intent, 1.0, &mut ());
        assert_eq!(state.speed, config.max_speed);
    }

    #[test]
    fn test_accelerate_without_engine_is_reported() {
        let config = VehicleConfig::default();
        let mut state = VehicleState {
            speed: 12.0,
            ..VehicleState::default()
        };
        let intent = Intent {
            accelerate: true,
            ..Intent::default()
        };
        let mut events = Vec::new();

        state.step_longitudinal(&config, &intent, 1.0, &mut events);
        assert_eq!(state.speed, 12.0);
        assert_eq!(events, vec![VehicleEvent::AccelerateWithoutEngine]);
    }

    #[test]
    fn test_brake_works_with_engine_off() {
        let config = VehicleConfig::default();
        let mut state = VehicleState {
            speed: 100.0,
            ..VehicleState::default()
        };
        let intent = Intent {
            brake: true,
            ..Intent::default()
        };

        state.step_longitudinal(&config, &intent, 0.5, &mut ());
        assert_eq!(state.speed, 25.0);
    }

    #[test]
    fn test_start_and_pull_away_in_one_frame() {
        let config = VehicleConfig::default();
        let mut state = VehicleState::default();
        let intent = Intent {
            accelerate: true,
            toggle_engine: true,
            ..Intent::default()
        };
        let mut events = Vec::new();

        state.step_longitudinal(&config, &intent, 0.5, &mut events);
        assert!(state.engine_running);
        assert_eq!(state.speed, 10.0);
        assert_eq!(events, vec![VehicleEvent::EngineStarted]);
    }

    #[test]
    fn test_stopping_engine_ignores_throttle_in_same_frame() {
        let config = VehicleConfig::default();
        let mut state = running_at(80.0);
        let intent = Intent {
            accelerate: true,
            toggle_engine: true,
            ..Intent::default()
        };
        let mut events = Vec::new();

        state.step_longitudinal(&config, &intent, 0.5, &mut events);
        assert!(!state.engine_running);
        assert_eq!(state.speed, 0.0);
        assert_eq!(
            events,
            vec![
                VehicleEvent::EngineStopped,
                VehicleEvent::AccelerateWithoutEngine
            ]
        );
    }
}
