//! Infinite plane in point/normal form.

use millkern_math::{is_zero, Float, Point3, Vec3, EPSILON};

/// An infinite plane through `p` with unit normal `n`.
///
/// A degenerate plane (zero normal, from a zero-area triangle) never
/// intersects anything; every query on it returns `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub p: Point3,
    /// Unit normal, or the zero vector for a degenerate plane.
    pub n: Vec3,
}

impl Plane {
    /// Create a plane from a point and a (not necessarily unit) normal.
    pub fn new(p: Point3, normal: Vec3) -> Self {
        let n = normal.try_normalize(EPSILON).unwrap_or_else(Vec3::zeros);
        Self { p, n }
    }

    /// Intersect the line through `point` along `direction` with this plane.
    ///
    /// Returns the intersection point and the signed parameter `l` with
    /// `point + direction * l` on the plane. `None` when the line runs
    /// parallel to the plane (or the plane is degenerate).
    pub fn intersect_point(&self, direction: &Vec3, point: &Point3) -> Option<(Point3, Float)> {
        let denom = self.n.dot(direction);
        if is_zero(denom) {
            return None;
        }
        let l = (self.p - point).dot(&self.n) / denom;
        Some((point + direction * l, l))
    }

    /// Signed distance from `point` to the plane along the normal.
    pub fn signed_distance(&self, point: &Point3) -> Float {
        (point - self.p).dot(&self.n)
    }
}
