use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VehicleConfigError {
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidField { field: &'static str, value: f64 },

    #[error("reverse_snap_factor must lie in [0, 1], got {0}")]
    ReverseSnapOutOfRange(f64),

    #[error("speed steer curve needs at least one key")]
    EmptyCurve,

    #[error("speed steer curve key {index} at ({x}, {y}) lies outside [0, 1] x [0, 1]")]
    CurveKeyOutOfRange { index: usize, x: f64, y: f64 },

    #[error("speed steer curve keys must have strictly increasing x, key {index} does not")]
    CurveKeysUnordered { index: usize },

    #[error("speed steer curve must not increase with speed, key {index} does")]
    CurveIncreasing { index: usize },
}

// A single (normalized speed, intensity) key on the steering curve
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub x: f64,
    pub y: f64,
}

/// Piecewise-linear steering intensity by normalized speed.
///
/// Inputs are clamped to [0, 1]; below the first key the curve holds the
/// first value and above the last key it holds the last value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedSteerCurve {
    keys: Vec<CurveKey>,
}

impl SpeedSteerCurve {
    pub fn new(points: &[(f64, f64)]) -> Result<Self, VehicleConfigError> {
        let curve = SpeedSteerCurve {
            keys: points.iter().map(|&(x, y)| CurveKey { x, y }).collect(),
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn validate(&self) -> Result<(), VehicleConfigError> {
        if self.keys.is_empty() {
            return Err(VehicleConfigError::EmptyCurve);
        }

        let unit = 0.0..=1.0;
        for (index, key) in self.keys.iter().enumerate() {
            if !unit.contains(&key.x) || !unit.contains(&key.y) {
                return Err(VehicleConfigError::CurveKeyOutOfRange {
                    index,
                    x: key.x,
                    y: key.y,
                });
            }
        }

        for (index, pair) in self.keys.windows(2).enumerate() {
            if pair[1].x <= pair[0].x {
                return Err(VehicleConfigError::CurveKeysUnordered { index: index + 1 });
            }
            if pair[1].y > pair[0].y {
                return Err(VehicleConfigError::CurveIncreasing { index: index + 1 });
            }
        }

        Ok(())
    }

    pub fn evaluate(&self, normalized_speed: f64) -> f64 {
        let t = if normalized_speed.is_nan() {
            0.0
        } else {
            normalized_speed.clamp(0.0, 1.0)
        };

        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 1.0,
        };

        if t <= first.x {
            return first.y;
        }
        if t >= last.x {
            return last.y;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t == b.x {
                return b.y;
            }
            if t < b.x {
                let blend = (t - a.x) / (b.x - a.x);
                return a.y + (b.y - a.y) * blend;
            }
        }

        last.y
    }
}

impl Default for SpeedSteerCurve {
    fn default() -> Self {
        SpeedSteerCurve {
            keys: vec![
                CurveKey { x: 0.0, y: 1.0 },
                CurveKey { x: 0.3, y: 0.9 },
                CurveKey { x: 0.6, y: 0.7 },
                CurveKey { x: 1.0, y: 0.4 },
            ],
        }
    }
}

/// Static tuning for one vehicle. Speeds are in km/h, rates per second and
/// turn speed in degrees per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub max_speed: f64,
    pub acceleration: f64,
    pub brake_force: f64,
    pub turn_speed: f64,
    pub steer_accel: f64,
    pub steer_decel: f64,
    pub reverse_snap_factor: f64,
    pub speed_steer_curve: SpeedSteerCurve,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        VehicleConfig {
            max_speed: 300.0,
            acceleration: 20.0,
            brake_force: 150.0,
            turn_speed: 90.0,
            steer_accel: 4.0,
            steer_decel: 6.0,
            reverse_snap_factor: 0.3,
            speed_steer_curve: SpeedSteerCurve::default(),
        }
    }
}

impl VehicleConfig {
    /// Checks a hand-built config; vehicles refuse to be built from one that fails.
    pub fn validate(&self) -> Result<(), VehicleConfigError> {
        let fields = [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("brake_force", self.brake_force),
            ("turn_speed", self.turn_speed),
            ("steer_accel", self.steer_accel),
            ("steer_decel", self.steer_decel),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(VehicleConfigError::InvalidField { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.reverse_snap_factor) {
            return Err(VehicleConfigError::ReverseSnapOutOfRange(
                self.reverse_snap_factor,
            ));
        }

        self.speed_steer_curve.validate()
    }

    pub fn validated(self) -> Result<Self, VehicleConfigError> {
        self.validate()?;
        Ok(self)
    }

    // intensity multiplier at the given speed; a zero max speed reads as standstill
    pub fn steer_intensity(&self, speed: f64) -> f64 {
        let normalized = if self.max_speed > 0.0 {
            speed / self.max_speed
        } else {
            0.0
        };
        self.speed_steer_curve.evaluate(normalized)
    }
}
