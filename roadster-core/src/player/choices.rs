use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vehicle_config::VehicleConfig;

pub type CarID = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Car {
    Janice,
    Lilly,
    Scarlett,
}

// How a car deviates from the stock tuning. Variants differ only in numbers,
// so each car is just a named parameter set on top of VehicleConfig::default()
struct Handling {
    acceleration_multiplier: f64,
    brake_efficiency: f64,
    turn_speed: f64,
}

impl Car {
    pub const ALL: [Car; 3] = [Car::Janice, Car::Lilly, Car::Scarlett];

    pub fn id(&self) -> CarID {
        match self {
            Car::Janice => 1,
            Car::Lilly => 2,
            Car::Scarlett => 3,
        }
    }

    pub fn from_id(id: CarID) -> Option<Car> {
        Car::ALL.into_iter().find(|car| car.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Car::Janice => "Janice",
            Car::Lilly => "Lilly",
            Car::Scarlett => "Scarlett",
        }
    }

    fn handling(&self) -> Handling {
        match self {
            // light and twitchy
            Car::Janice => Handling {
                acceleration_multiplier: 1.4,
                brake_efficiency: 0.9,
                turn_speed: 70.0,
            },
            // balanced
            Car::Lilly => Handling {
                acceleration_multiplier: 1.0,
                brake_efficiency: 1.0,
                turn_speed: 50.0,
            },
            // heavy, slow to get going but stops hard
            Car::Scarlett => Handling {
                acceleration_multiplier: 0.75,
                brake_efficiency: 1.25,
                turn_speed: 60.0,
            },
        }
    }

    pub fn config(&self) -> VehicleConfig {
        let stock = VehicleConfig::default();
        let handling = self.handling();

        VehicleConfig {
            acceleration: stock.acceleration * handling.acceleration_multiplier,
            brake_force: stock.brake_force * handling.brake_efficiency,
            turn_speed: handling.turn_speed,
            ..stock
        }
    }
}

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("could not access selection file: {0}")]
    Io(#[from] std::io::Error),

    #[error("selection file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// The menu's car choice, persisted between runs as {"SelectedCarId": n}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSelection {
    #[serde(rename = "SelectedCarId")]
    pub selected_car_id: CarID,
}

impl Default for CarSelection {
    fn default() -> Self {
        Self {
            selected_car_id: Car::Lilly.id(),
        }
    }
}

impl CarSelection {
    /// Reads the saved choice. Without a file, or with a stored id of 0, the
    /// first car of the roster is picked; an empty roster keeps the default.
    pub fn load(path: &Path, roster: &[Car]) -> Result<CarSelection, SelectionError> {
        let fallback = match roster.first() {
            Some(car) => CarSelection {
                selected_car_id: car.id(),
            },
            None => CarSelection::default(),
        };

        if !path.exists() {
            return Ok(fallback);
        }

        let json = fs::read_to_string(path)?;
        let stored: CarSelection = serde_json::from_str(&json)?;

        if stored.selected_car_id != 0 {
            Ok(stored)
        } else {
            Ok(fallback)
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SelectionError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn select(&mut self, car: Car) {
        self.selected_car_id = car.id();
    }

    /// The selected car, if it is part of the roster.
    pub fn selected_car(&self, roster: &[Car]) -> Option<Car> {
        roster
            .iter()
            .copied()
            .find(|car| car.id() == self.selected_car_id)
    }
}
