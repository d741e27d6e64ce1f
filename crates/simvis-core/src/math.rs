use crate::Vector3;

/// Convert an angle in degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert a polar observation to a Cartesian point in the observer's frame.
///
/// `elevation` and `azimuth` are in radians. The convention is:
/// x points along the optical axis (zero angles), y to the left
/// (positive azimuth), z up (positive elevation).
///
/// Negative `r` is not validated and produces a point mirrored through the
/// origin.
pub fn polar_to_point(r: f64, elevation: f64, azimuth: f64) -> Vector3 {
    Vector3::new(
        r * elevation.cos() * azimuth.cos(),
        r * elevation.cos() * azimuth.sin(),
        r * elevation.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(0.0), 0.0);
        assert_relative_eq!(deg_to_rad(90.0), FRAC_PI_2);
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(-90.0), -FRAC_PI_2);
    }

    #[test]
    fn test_zero_angles_point_along_x() {
        let p = polar_to_point(2.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn test_positive_elevation_points_up() {
        let p = polar_to_point(1.0, FRAC_PI_2, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 1.0);
    }

    #[test]
    fn test_positive_azimuth_points_left() {
        let p = polar_to_point(1.0, 0.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 1.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn test_diagonal_elevation() {
        let p = polar_to_point(1.0, deg_to_rad(45.0), 0.0);
        assert_relative_eq!(p.x, 0.7071, epsilon = 1e-4);
        assert_relative_eq!(p.z, 0.7071, epsilon = 1e-4);
    }

    #[test]
    fn test_negative_distance_mirrors() {
        let p = polar_to_point(-1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, -1.0);
    }
}
