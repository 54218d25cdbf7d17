use roadster_core::entity_location::EntityLocation;
use roadster_core::player::choices::{Car, CarSelection};
use tracing::error;

use crate::physics::Vehicle;

// Build the car the player picked in the menu, parked at the spawn point with
// its engine off. Nothing is spawned if the saved choice is not in the roster
pub fn spawn_selected_car(
    selection: &CarSelection,
    roster: &[Car],
    spawn_point: EntityLocation,
) -> Option<(Car, Vehicle)> {
    let car = match selection.selected_car(roster) {
        Some(car) => car,
        None => {
            error!(
                selected_car_id = selection.selected_car_id,
                "failed to spawn player: selected car is not in the roster"
            );
            return None;
        }
    };

    match Vehicle::at(car.config(), spawn_point) {
        Ok(vehicle) => Some((car, vehicle)),
        Err(e) => {
            error!(car = car.name(), "car has an invalid configuration: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use roadster_core::entity_location::EntityLocation;
    use roadster_core::player::choices::{Car, CarSelection};

    use super::spawn_selected_car;

    #[test]
    fn test_spawns_selected_car_at_spawn_point() {
        let spawn_point = EntityLocation::new(DVec2::new(21.5, 65.0), -90.0);
        let mut selection = CarSelection::default();
        selection.select(Car::Janice);

        let (car, vehicle) = spawn_selected_car(&selection, &Car::ALL, spawn_point).unwrap();

        assert_eq!(car, Car::Janice);
        assert_eq!(vehicle.config(), &Car::Janice.config());
        assert_eq!(vehicle.entity_location(), spawn_point);
        assert_eq!(vehicle.speed(), 0.0);
        assert!(!vehicle.engine_running());
    }

    #[test]
    fn test_nothing_spawns_for_unknown_car() {
        let selection = CarSelection {
            selected_car_id: 77,
        };
        assert!(spawn_selected_car(&selection, &Car::ALL, EntityLocation::default()).is_none());
    }
}
