//! Sweep tests for the flat bottom disc of a cutter.

use millkern_math::{is_zero, Float, Point3, Vec3, EPSILON};

use super::SweepHit;
use crate::{Edge, Plane, Triangle};

/// First contact of a disc (centre `center`, radius `radius`, normal +Z)
/// swept along `direction` with the triangle's plane.
///
/// The disc touches a tilted plane on its rim, at the point whose outward
/// direction matches the horizontal component of the plane normal; a
/// horizontal plane is touched flat, with the contact reported at the disc
/// centre.
pub fn intersect_circle_plane(
    center: &Point3,
    radius: Float,
    direction: &Vec3,
    triangle: &Triangle,
) -> Option<SweepHit> {
    let n = &triangle.normal;
    if is_zero(n.dot(direction)) {
        return None;
    }
    let ccp = match Vec3::new(n.x, n.y, 0.0).try_normalize(EPSILON) {
        Some(h) => center - h * radius,
        None => *center,
    };
    let (cp, d) = triangle.plane.intersect_point(direction, &ccp)?;
    SweepHit { ccp, cp, d }.in_front()
}

/// First contact of a disc with a lone vertex.
///
/// The vertex pierces the disc plane where the line through it along
/// `direction` meets that plane; contact happens when the pierce point
/// falls inside the circle. The sweep distance is the negated line
/// parameter: the plane test measures from the model point, the sweep
/// moves the disc.
pub fn intersect_circle_point(
    center: &Point3,
    axis: &Vec3,
    _radius: Float,
    radius_sq: Float,
    direction: &Vec3,
    point: &Point3,
) -> Option<SweepHit> {
    let disc_plane = Plane { p: *center, n: *axis };
    let (pierce, l) = disc_plane.intersect_point(direction, point)?;
    if (pierce - center).norm_squared() > radius_sq {
        return None;
    }
    SweepHit {
        ccp: pierce,
        cp: *point,
        d: -l,
    }
    .in_front()
}

/// First contact of a disc with the infinite line through `edge`.
///
/// Two regimes:
/// - the edge runs parallel to the disc plane: project the line onto the
///   plane along `direction`; the whole chord touches at once and the
///   contact is reported at the in-plane point closest to the centre;
/// - the edge is oblique: its line pierces the moving disc plane at a
///   point that travels affinely with the sweep, and the first contact is
///   where that pierce point crosses the rim (a quadratic).
///
/// Callers restrict the model contact point to the edge's `[0, len]`
/// range.
pub fn intersect_circle_line(
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
    let line_dir = &edge.dir;
    let da = line_dir.dot(axis);

    if is_zero(da) {
        // edge parallel to the disc plane
        if is_zero(direction.dot(axis)) {
            return None;
        }
        let disc_plane = Plane { p: *center, n: *axis };
        let (p1_proj, l) = disc_plane.intersect_point(direction, &edge.p1)?;
        let pc = p1_proj + line_dir * (center - p1_proj).dot(line_dir);
        if (pc - center).norm_squared() > radius_sq {
            return None;
        }
        let d = -l;
        return SweepHit {
            ccp: pc,
            cp: pc + direction * d,
            d,
        }
        .in_front();
    }

    // oblique edge: pierce point of the line in the disc plane, and its
    // in-plane velocity per unit of sweep
    let t0 = (center - edge.p1).dot(axis) / da;
    let offset = (edge.p1 + line_dir * t0) - center;
    let velocity = line_dir * (direction.dot(axis) / da) - direction;

    let a = velocity.norm_squared();
    if is_zero(a) {
        return None;
    }
    let b = 2.0 * offset.dot(&velocity);
    let c = offset.norm_squared() - radius_sq;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let d = (-b - disc.sqrt()) / (2.0 * a);
    let ccp = center + offset + velocity * d;
    SweepHit {
        ccp,
        cp: ccp + direction * d,
        d,
    }
    .in_front()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    fn flat_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        )
    }

    #[test]
    fn test_disc_drop_on_flat_plane() {
        let t = flat_triangle();
        let hit = intersect_circle_plane(&Point3::new(2.0, 2.0, 5.0), 1.0, &down(), &t).unwrap();
        assert!((hit.d - 5.0).abs() < 1e-10);
        assert!((hit.ccp - Point3::new(2.0, 2.0, 5.0)).norm() < 1e-10);
        assert!((hit.cp - Point3::new(2.0, 2.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn test_disc_drop_on_sloped_plane_touches_rim() {
        // plane rising along -x: normal has a +x component
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 10.0),
        );
        let hit = intersect_circle_plane(&Point3::new(5.0, 5.0, 20.0), 1.0, &down(), &t).unwrap();
        // rim point on the uphill (-x) side of the centre
        assert!(hit.ccp.x < 5.0 - 0.5);
        assert!((hit.cp - (hit.ccp + down() * hit.d)).norm() < 1e-10);
    }

    #[test]
    fn test_disc_drop_parallel_to_vertical_plane() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 10.0),
        );
        assert!(intersect_circle_plane(&Point3::new(5.0, 5.0, 20.0), 1.0, &down(), &t).is_none());
    }

    #[test]
    fn test_disc_vertex_hit_and_miss() {
        let axis = Vec3::z();
        let center = Point3::new(0.0, 0.0, 5.0);
        let inside = Point3::new(0.5, 0.0, 1.0);
        let hit = intersect_circle_point(&center, &axis, 1.0, 1.0, &down(), &inside).unwrap();
        assert!((hit.d - 4.0).abs() < 1e-10);
        assert!((hit.cp - inside).norm() < 1e-12);

        let outside = Point3::new(2.0, 0.0, 1.0);
        assert!(intersect_circle_point(&center, &axis, 1.0, 1.0, &down(), &outside).is_none());
    }

    #[test]
    fn test_disc_vertex_behind_origin_rejected() {
        let axis = Vec3::z();
        let center = Point3::new(0.0, 0.0, 5.0);
        let above = Point3::new(0.0, 0.0, 8.0);
        assert!(intersect_circle_point(&center, &axis, 1.0, 1.0, &down(), &above).is_none());
    }

    #[test]
    fn test_disc_line_parallel_edge() {
        let axis = Vec3::z();
        let center = Point3::new(0.0, 0.0, 5.0);
        let edge = Edge::new(Point3::new(-10.0, 0.5, 1.0), Point3::new(10.0, 0.5, 1.0));
        let hit = intersect_circle_line(&center, &axis, 1.0, 1.0, &down(), &edge).unwrap();
        assert!((hit.d - 4.0).abs() < 1e-10);
        // contact at the chord point nearest the centre
        assert!((hit.ccp - Point3::new(0.0, 0.5, 5.0)).norm() < 1e-10);
        assert!((hit.cp - Point3::new(0.0, 0.5, 1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_disc_line_parallel_edge_outside_radius() {
        let axis = Vec3::z();
        let center = Point3::new(0.0, 0.0, 5.0);
        let edge = Edge::new(Point3::new(-10.0, 3.0, 1.0), Point3::new(10.0, 3.0, 1.0));
        assert!(intersect_circle_line(&center, &axis, 1.0, 1.0, &down(), &edge).is_none());
    }

    #[test]
    fn test_disc_line_oblique_edge_rim_contact() {
        let axis = Vec3::z();
        let center = Point3::new(0.0, 0.0, 5.0);
        // line rising along +x through (0, 0, 0) at 45 degrees
        let edge = Edge::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 10.0));
        let hit = intersect_circle_line(&center, &axis, 1.0, 1.0, &down(), &edge).unwrap();
        // rim point on the +x side meets the line at z = 1 after dropping 4
        assert!((hit.ccp - Point3::new(1.0, 0.0, 5.0)).norm() < 1e-9);
        assert!((hit.cp - Point3::new(1.0, 0.0, 1.0)).norm() < 1e-9);
        assert!((hit.d - 4.0).abs() < 1e-9);
    }
}
