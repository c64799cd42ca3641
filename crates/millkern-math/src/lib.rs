#![warn(missing_docs)]

//! Math types and numerical policy for the millkern CAM kernel.
//!
//! Thin wrappers around nalgebra providing the point/vector types used by
//! the contact-point geometry, plus the single project-wide definition of
//! the scalar type, `EPSILON` and `INFINITY`.
//!
//! The scalar is `f64` by default; the `float-as-single` feature switches
//! the whole kernel to `f32` (useful when feeding GPU previews or trading
//! precision for memory on very large sample grids).

cfg_if::cfg_if! {
    if #[cfg(feature = "float-as-single")] {
        /// The kernel-wide scalar type.
        pub type Float = f32;
    } else {
        /// The kernel-wide scalar type.
        pub type Float = f64;
    }
}

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<Float>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<Float>;

/// Sentinel distance for "no contact". All real contact distances compare
/// smaller, so dispatch loops can take an unconditional minimum.
pub const INFINITY: Float = Float::INFINITY;

/// Project-wide linear tolerance (model units, nominally mm).
///
/// Equality tests on distances, denominators and direction components go
/// through this rather than exact comparison.
pub const EPSILON: Float = 1e-6;

/// True when a scalar is zero within [`EPSILON`].
pub fn is_zero(x: Float) -> bool {
    x.abs() < EPSILON
}

/// The downward unit vector used by every vertical drop sweep.
pub fn vertical() -> Vec3 {
    Vec3::new(0.0, 0.0, -1.0)
}

/// True when a sweep direction has no lateral (XY) component.
pub fn is_vertical(direction: &Vec3) -> bool {
    is_zero(direction.x) && is_zero(direction.y)
}

/// Squared XY distance between two points.
pub fn xy_distance_sq(a: &Point3, b: &Point3) -> Float {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(1e-9));
        assert!(!is_zero(1e-3));
    }

    #[test]
    fn test_vertical_direction() {
        assert!(is_vertical(&vertical()));
        assert!(!is_vertical(&Vec3::new(1.0, 0.0, 0.0)));
        assert!(is_vertical(&Vec3::new(0.0, 0.0, -2.5)));
    }

    #[test]
    fn test_xy_distance_sq() {
        let a = Point3::new(1.0, 2.0, 10.0);
        let b = Point3::new(4.0, 6.0, -3.0);
        assert!((xy_distance_sq(&a, &b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_infinity_compares_larger() {
        assert!(1e30 < INFINITY);
    }
}
