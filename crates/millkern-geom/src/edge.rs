//! Directed triangle edge.

use millkern_math::{Float, Point3, Vec3, EPSILON};

/// A directed segment from `p1` to `p2` with precomputed unit direction
/// and length, so that `p1 + dir * len == p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start point.
    pub p1: Point3,
    /// End point.
    pub p2: Point3,
    /// Unit direction from `p1` to `p2` (zero for a degenerate edge).
    pub dir: Vec3,
    /// Segment length.
    pub len: Float,
}

impl Edge {
    /// Create an edge between two points.
    pub fn new(p1: Point3, p2: Point3) -> Self {
        let v = p2 - p1;
        let len = v.norm();
        let dir = if len < EPSILON { Vec3::zeros() } else { v / len };
        Self { p1, p2, dir, len }
    }

    /// True when the endpoints coincide (within tolerance).
    pub fn is_degenerate(&self) -> bool {
        self.len < EPSILON
    }

    /// Point at fractional parameter `m` (`0` = `p1`, `1` = `p2`).
    pub fn point_at(&self, m: Float) -> Point3 {
        self.p1 + (self.p2 - self.p1) * m
    }

    /// Closest point to `p` on the infinite line through this edge.
    pub fn closest_point(&self, p: &Point3) -> Point3 {
        self.p1 + self.dir * (p - self.p1).dot(&self.dir)
    }

    /// Signed distance of `p`'s line-projection from `p1`, in model units.
    ///
    /// Values in `[0, len]` project onto the segment itself.
    pub fn projection(&self, p: &Point3) -> Float {
        (p - self.p1).dot(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_invariant() {
        let e = Edge::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 3.0));
        assert!((e.len - 5.0).abs() < 1e-12);
        assert!((e.dir.norm() - 1.0).abs() < 1e-12);
        assert!((e.p1 + e.dir * e.len - e.p2).norm() < 1e-12);
    }

    #[test]
    fn test_point_at() {
        let e = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 4.0));
        assert!((e.point_at(0.5) - Point3::new(5.0, 0.0, 2.0)).norm() < 1e-12);
        assert!((e.point_at(0.0) - e.p1).norm() < 1e-12);
        assert!((e.point_at(1.0) - e.p2).norm() < 1e-12);
    }

    #[test]
    fn test_closest_point_and_projection() {
        let e = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let p = Point3::new(3.0, 4.0, 0.0);
        assert!((e.closest_point(&p) - Point3::new(3.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((e.projection(&p) - 3.0).abs() < 1e-12);
        // in front of p1
        assert!(e.projection(&Point3::new(-2.0, 1.0, 0.0)) < 0.0);
    }

    #[test]
    fn test_degenerate_edge() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let e = Edge::new(p, p);
        assert!(e.is_degenerate());
        assert!(e.dir.norm() < 1e-12);
    }
}
