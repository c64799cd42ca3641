//! Sweep tests for the toroidal fillet of a cutter.
//!
//! The torus ring (tube-centre circle) has radius `major` and lies in the
//! plane through `center` perpendicular to `axis`; the tube has radius
//! `minor`. A ball cutter is the `major == 0` special case and is handled
//! by the same formulas.

use millkern_math::{is_vertical, is_zero, xy_distance_sq, Float, Point3, Vec3, EPSILON, INFINITY};

use super::poly::solve_quartic;
use super::SweepHit;
use crate::Triangle;

/// First contact of a swept torus with the triangle's plane.
///
/// Closed form: the torus touches a plane at the surface point whose
/// outward normal opposes the plane normal, i.e. ring offset `-major * ĥ`
/// (horizontal part of the normal) plus tube offset `-minor * n`. For a
/// horizontal plane the whole bottom circle touches at once and a fixed
/// rim point is reported; face containment for that case is covered by the
/// cutter's flat-disc test.
pub fn intersect_torus_plane(
    center: &Point3,
    axis: &Vec3,
    major: Float,
    minor: Float,
    direction: &Vec3,
    triangle: &Triangle,
) -> Option<SweepHit> {
    let n = &triangle.normal;
    if is_zero(n.dot(direction)) {
        return None;
    }
    let ccp = match Vec3::new(n.x, n.y, 0.0).try_normalize(EPSILON) {
        Some(h) => center - h * major - n * minor,
        None => center + Vec3::x() * major - axis * minor,
    };
    let (cp, d) = triangle.plane.intersect_point(direction, &ccp)?;
    SweepHit { ccp, cp, d }.in_front()
}

/// First contact of a swept torus with a lone vertex.
///
/// Three regimes:
/// - vertical sweep (the `(0,0,-1)` drop convention): the contact lies on
///   the lower half of the tube directly above the vertex; closed form on
///   the tube cross-section. The radial acceptance band is
///   `(rho - major)^2 <= minor^2`, which keeps the ball cutter's interior
///   (`rho < minor - major`) reachable;
/// - lateral sweep (`direction.z == 0`): the contact lies on the outer
///   equatorial band at the vertex's height; closed form on the slice
///   circle of radius `major + sqrt(minor^2 - z^2)`;
/// - oblique sweep: the relative motion is a line, so the contact distance
///   is the smallest positive root of the torus quartic.
#[allow(clippy::too_many_arguments)]
pub fn intersect_torus_point(
    center: &Point3,
    axis: &Vec3,
    major: Float,
    minor: Float,
    major_sq: Float,
    minor_sq: Float,
    direction: &Vec3,
    point: &Point3,
) -> Option<SweepHit> {
    if is_vertical(direction) {
        let rho = xy_distance_sq(point, center).sqrt();
        let radial = rho - major;
        let height_sq = minor_sq - radial * radial;
        if height_sq < 0.0 {
            return None;
        }
        let ccp = Point3::new(point.x, point.y, center.z - height_sq.sqrt());
        let d = ccp.z - point.z;
        return SweepHit {
            ccp,
            cp: *point,
            d,
        }
        .in_front();
    }

    if is_zero(direction.z) {
        let z = point.z - center.z;
        if z.abs() > minor - EPSILON {
            return None;
        }
        let band = major + (minor_sq - z * z).sqrt();
        let n = axis.cross(direction).normalize();
        let offset = (point - center).dot(&n);
        if offset.abs() > band - EPSILON {
            return None;
        }
        let along = (band * band - offset * offset).sqrt();
        let mut ccp = center + n * offset + direction * along;
        ccp.z = point.z;
        let d = (point - ccp).dot(direction);
        return SweepHit {
            ccp,
            cp: *point,
            d,
        }
        .in_front();
    }

    // oblique: a ray from the vertex along the reversed sweep hits the
    // stationary torus at the contact distance
    let o = point - center;
    let rd = -direction;
    let k = o.norm_squared() - (major_sq + minor_sq);
    let od = o.dot(&rd);
    let oa = o.dot(axis);
    let da = rd.dot(axis);

    let c3 = 4.0 * od;
    let c2 = 2.0 * k + 4.0 * od * od + 4.0 * major_sq * da * da;
    let c1 = 4.0 * k * od + 8.0 * major_sq * oa * da;
    let c0 = k * k - 4.0 * major_sq * (minor_sq - oa * oa);

    let d = solve_quartic(1.0, c3, c2, c1, c0)
        .into_iter()
        .filter(|&t| t > EPSILON)
        .fold(INFINITY, Float::min);
    if !d.is_finite() {
        return None;
    }
    SweepHit {
        ccp: point - direction * d,
        cp: *point,
        d,
    }
    .in_front()
}
