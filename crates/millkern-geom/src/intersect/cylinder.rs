//! Sweep tests for the cylindrical side wall of a cutter.

use millkern_math::{is_zero, Float, Point3, Vec3, EPSILON};

use super::SweepHit;
use crate::Edge;

/// First contact of an infinite cylinder surface (axis through `center`
/// along `axis`, radius `radius`) swept along `direction` with a lone
/// vertex.
///
/// Requires a lateral sweep component: a sweep parallel to the axis never
/// closes on the side wall and returns `None`.
pub fn intersect_cylinder_point(
    center: &Point3,
    axis: &Vec3,
    _radius: Float,
    radius_sq: Float,
    direction: &Vec3,
    point: &Point3,
) -> Option<SweepHit> {
    let w = point - center;
    let w_perp = w - axis * w.dot(axis);
    let d_perp = direction - axis * direction.dot(axis);

    let a = d_perp.norm_squared();
    if is_zero(a) {
        return None;
    }
    let h = w_perp.dot(&d_perp);
    let disc = h * h - a * (w_perp.norm_squared() - radius_sq);
    if disc < 0.0 {
        return None;
    }
    let d = (h - disc.sqrt()) / a;
    SweepHit {
        ccp: point - direction * d,
        cp: *point,
        d,
    }
    .in_front()
}

/// First contact of an infinite cylinder surface swept along `direction`
/// with the infinite line through `edge`.
///
/// The line–axis distance is affine in the sweep parameter; the earlier of
/// the two `distance == radius` roots is the entry contact. An edge
/// parallel to the axis has no preferred height and degrades to the point
/// test at `p1`. Callers restrict the model contact point to the edge's
/// `[0, len]` range.
pub fn intersect_cylinder_line(
    center: &Point3,
    axis: &Vec3,
    radius: Float,
    radius_sq: Float,
    direction: &Vec3,
    edge: &Edge,
) -> Option<SweepHit> {
    if edge.is_degenerate() {
        return None;
    }
    let cross = edge.dir.cross(axis);
    if cross.norm() < EPSILON {
        return intersect_cylinder_point(center, axis, radius, radius_sq, direction, &edge.p1);
    }
    let n = cross.normalize();

    let alpha = (edge.p1 - center).dot(&n);
    let beta = direction.dot(&n);
    if is_zero(beta) {
        // sweep keeps the line-axis distance constant
        return None;
    }
    let d = ((alpha - radius) / beta).min((alpha + radius) / beta);
    if d <= EPSILON {
        return None;
    }

    // at contact the edge line and the moved axis touch at their mutual
    // perpendicular foot
    let moved = center + direction * d;
    let w0 = edge.p1 - moved;
    let b = edge.dir.dot(axis);
    let denom = 1.0 - b * b;
    if is_zero(denom) {
        return None;
    }
    let s = (b * axis.dot(&w0) - edge.dir.dot(&w0)) / denom;
    let cp = edge.p1 + edge.dir * s;
    SweepHit {
        ccp: cp - direction * d,
        cp,
        d,
    }
    .in_front()
}
