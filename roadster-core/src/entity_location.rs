use glam::DVec2;
use serde::{Deserialize, Serialize};

// EntityLocation is what the host reads back after every tick to place the car:
// a planar position on the ground (x, z) and a heading about the vertical axis
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityLocation {
    pub position: DVec2,
    // degrees, kept in (-180, 180]; 0 faces +z and positive turns right
    pub heading: f64,
}

impl EntityLocation {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
        }
    }

    /// Unit vector the car drives along, in (x, z).
    pub fn forward(&self) -> DVec2 {
        let radians = self.heading.to_radians();
        DVec2::new(radians.sin(), radians.cos())
    }

    pub fn rotated(&self, yaw_degrees: f64) -> Self {
        Self {
            position: self.position,
            heading: normalize_heading(self.heading + yaw_degrees),
        }
    }
}

impl Default for EntityLocation {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_heading(degrees: f64) -> f64 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }

    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::{normalize_heading, EntityLocation};

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(180.0), 180.0);
        assert_eq!(normalize_heading(-180.0), 180.0);
        assert_eq!(normalize_heading(190.0), -170.0);
        assert_eq!(normalize_heading(-190.0), 170.0);
        assert_eq!(normalize_heading(720.0), 0.0);
    }

    #[test]
    fn test_forward_follows_heading() {
        let north = EntityLocation::default();
        assert!(north.forward().abs_diff_eq(DVec2::new(0.0, 1.0), 1e-12));

        // turning right from +z faces +x
        let east = north.rotated(90.0);
        assert!(east.forward().abs_diff_eq(DVec2::new(1.0, 0.0), 1e-12));

        let west = north.rotated(-90.0);
        assert!(west.forward().abs_diff_eq(DVec2::new(-1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_rotation_wraps() {
        let location = EntityLocation::new(DVec2::new(3.0, 4.0), 170.0).rotated(20.0);
        assert_eq!(location.position, DVec2::new(3.0, 4.0));
        assert!((location.heading - -170.0).abs() < 1e-9);
    }
}
