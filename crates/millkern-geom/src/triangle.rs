//! Triangle with precomputed broad-phase data.

use millkern_math::{Float, Point3, Vec3, EPSILON};

use crate::edge::Edge;
use crate::plane::Plane;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Componentwise minimum corner.
    pub min: Point3,
    /// Componentwise maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Bounding box of a set of points.
    pub fn from_points(points: &[Point3]) -> Self {
        let mut min = Point3::new(Float::INFINITY, Float::INFINITY, Float::INFINITY);
        let mut max = Point3::new(
            Float::NEG_INFINITY,
            Float::NEG_INFINITY,
            Float::NEG_INFINITY,
        );
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Self { min, max }
    }

    /// True when the XY footprints of `self` and `other` are disjoint.
    pub fn disjoint_xy(&self, other: &Aabb) -> bool {
        self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y
    }
}

/// A triangle of the workpiece model, immutable once constructed.
///
/// Vertices are stored counter-clockwise when seen from the outside, so
/// `normal = normalize((p2 - p1) × (p3 - p1))` points away from the
/// material. A zero-area triangle gets a zero normal and never reports
/// contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub p1: Point3,
    /// Second vertex.
    pub p2: Point3,
    /// Third vertex.
    pub p3: Point3,
    /// Directed edge `p1 -> p2`.
    pub e1: Edge,
    /// Directed edge `p2 -> p3`.
    pub e2: Edge,
    /// Directed edge `p3 -> p1`.
    pub e3: Edge,
    /// Unit normal (zero for a degenerate triangle).
    pub normal: Vec3,
    /// The supporting plane.
    pub plane: Plane,
    /// Centroid.
    pub center: Point3,
    /// Bounding-circle radius around the centroid.
    pub radius: Float,
    /// Squared bounding-circle radius.
    pub radius_sq: Float,
    /// Axis-aligned bounding box.
    pub aabb: Aabb,
}

impl Triangle {
    /// Build a triangle and its derived broad-phase data.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        let normal = (p2 - p1)
            .cross(&(p3 - p1))
            .try_normalize(EPSILON)
            .unwrap_or_else(Vec3::zeros);
        let center = Point3::from((p1.coords + p2.coords + p3.coords) / 3.0);
        let radius = (p1 - center)
            .norm()
            .max((p2 - center).norm())
            .max((p3 - center).norm());
        Self {
            p1,
            p2,
            p3,
            e1: Edge::new(p1, p2),
            e2: Edge::new(p2, p3),
            e3: Edge::new(p3, p1),
            normal,
            plane: Plane { p: p1, n: normal },
            center,
            radius,
            radius_sq: radius * radius,
            aabb: Aabb::from_points(&[p1, p2, p3]),
        }
    }

    /// The three directed edges.
    pub fn edges(&self) -> [&Edge; 3] {
        [&self.e1, &self.e2, &self.e3]
    }

    /// The three vertices.
    pub fn vertices(&self) -> [&Point3; 3] {
        [&self.p1, &self.p2, &self.p3]
    }

    /// True when `p` (assumed on the triangle's plane) lies within or on
    /// the triangle.
    ///
    /// Barycentric dot-product test; a small negative slack on the
    /// coordinates keeps points on edges and vertices inside.
    pub fn point_inside(&self, p: &Point3) -> bool {
        let v0 = self.p2 - self.p1;
        let v1 = self.p3 - self.p1;
        let v2 = p - self.p1;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < 1e-10 {
            return false;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        let eps = -1e-8;
        u >= eps && v >= eps && w >= eps
    }
}
