//! Planar geometry over normalized landmarks.
//!
//! Every check in the analyzers reduces to one of these primitives. Depth
//! (`z`) is ignored throughout.

use crate::types::Landmark;

/// Angle at vertex `b` formed by the rays `b→a` and `b→c`, in degrees within `[0, 180]`.
///
/// Computed as the absolute difference of the two ray headings, reflected
/// into the lower half-turn. `a` or `c` coinciding with `b` has no defined
/// heading and yields whatever `atan2(0, 0)` produces.
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let to_a = a.to_point2() - b.to_point2();
    let to_c = c.to_point2() - b.to_point2();

    let radians = to_c.y.atan2(to_c.x) - to_a.y.atan2(to_a.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Euclidean distance between two landmarks using `x` and `y` only
pub fn distance(a: &Landmark, b: &Landmark) -> f64 {
    nalgebra::distance(&a.to_point2(), &b.to_point2())
}

/// Component-wise midpoint of two landmarks; visibility is dropped
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    let mid = nalgebra::center(&a.to_point2(), &b.to_point2());
    Landmark::new(mid.x, mid.y, (a.z + b.z) / 2.0)
}

/// Mean of two angles, the way left/right joint pairs are combined
pub fn mean_angle(left: f64, right: f64) -> f64 {
    (left + right) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Landmark {
        Landmark::xy(x, y)
    }

    #[test]
    fn test_straight_line_is_180() {
        let a = angle(&at(0.0, 0.0), &at(0.5, 0.0), &at(1.0, 0.0));
        assert!((a - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle() {
        let a = angle(&at(0.0, 0.0), &at(0.5, 0.0), &at(0.5, 0.5));
        assert!((a - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflex_headings_are_reflected() {
        // Headings are -135° and 135°: raw difference 270°, interior angle 90°
        let a = angle(&at(0.4, 0.4), &at(0.5, 0.5), &at(0.4, 0.6));
        assert!((a - 90.0).abs() < 1e-9);
        assert!((0.0..=180.0).contains(&a));
    }

    #[test]
    fn test_angle_is_symmetric_in_endpoints() {
        let (a, b, c) = (at(0.1, 0.7), at(0.4, 0.3), at(0.9, 0.6));
        assert!((angle(&a, &b, &c) - angle(&c, &b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 5.0);
        let b = Landmark::new(0.3, 0.4, -2.0);
        assert!((distance(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&at(0.2, 0.4), &at(0.6, 0.8));
        assert!((m.x - 0.4).abs() < 1e-12);
        assert!((m.y - 0.6).abs() < 1e-12);
        assert_eq!(m.visibility, None);
    }
}
