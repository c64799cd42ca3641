//! The cutter capability and its broad-phase sweep façade.

use std::cmp::Ordering;
use std::fmt;

use millkern_geom::Triangle;
use millkern_math::{is_zero, vertical, xy_distance_sq, Float, Point3, Vec3};

use crate::body::CutterBody;
use crate::error::Result;
use crate::preview::PreviewPrim;
use crate::proxy::{CollisionEngine, CollisionProxy};

/// First contact of a cutter sweep with a triangle.
///
/// `location` is the cutter reference point placed so that the tool
/// exactly touches the triangle; `distance` is the sweep parameter to that
/// contact (smaller is earlier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Cutter reference point at contact.
    pub location: Point3,
    /// Sweep distance to contact.
    pub distance: Float,
}

/// Keep the earlier of two contact candidates.
pub(crate) fn closer(best: Option<Contact>, candidate: Contact) -> Option<Contact> {
    match best {
        Some(b) if b.distance <= candidate.distance => Some(b),
        _ => Some(candidate),
    }
}

/// The capability every cutter shape provides.
///
/// Shared fields live in a [`CutterBody`]; shapes add their own derived
/// geometry and re-derive it inside `move_to` / `set_required_distance`.
/// `intersect` takes `&self`, so one immutable cutter may serve many
/// triangles concurrently; mutation through `move_to` is what makes a
/// cutter single-threaded (use one cutter per worker).
pub trait Cutter: fmt::Debug {
    /// The shared state record.
    fn body(&self) -> &CutterBody;

    /// Move the reference point and re-derive every dependent position.
    fn move_to(&mut self, location: Point3);

    /// Set the offset inflation (`v >= 0`; negative values are ignored)
    /// and re-derive every `distance_*` field.
    fn set_required_distance(&mut self, value: Float);

    /// First contact along `direction` with `triangle`, across every
    /// contact region of this shape. `None` when the sweep misses.
    fn intersect(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact>;

    /// Shape identity for comparison and deduplication (location-free).
    fn shape_key(&self) -> ShapeKey;

    /// Produce a broad-phase collision proxy for the named engine.
    ///
    /// The proxy is a value owned by the caller; the cutter keeps no
    /// engine state. Toroidal shapes are approximated by their enclosing
    /// cylinder (broad-phase only).
    fn collision_proxy(&self, engine: CollisionEngine) -> Result<CollisionProxy>;

    /// Primitive surfaces for an external renderer.
    fn preview(&self) -> Vec<PreviewPrim>;

    /// Vertical first contact: the reference point when the tool, dropped
    /// straight down, first touches `triangle`. `None` when broad-phase
    /// rejects or the sweep misses.
    fn drop(&self, triangle: &Triangle) -> Option<Point3> {
        let body = self.body();

        if body.minx() > triangle.aabb.max.x
            || body.maxx() < triangle.aabb.min.x
            || body.miny() > triangle.aabb.max.y
            || body.maxy() < triangle.aabb.min.y
        {
            return None;
        }

        // sum-of-radii check against the bounding circle, expanded to
        // avoid the square root
        let reach = body.distance_radius_sq
            + 2.0 * body.distance_radius * triangle.radius
            + triangle.radius_sq;
        if xy_distance_sq(&triangle.center, &body.location) > reach {
            return None;
        }

        self.intersect(&vertical(), triangle).map(|c| c.location)
    }

    /// Lateral first contact along `(dx, dy, 0)`.
    ///
    /// Retained for push/waterline strategies; the drop-based strategies
    /// never call it.
    fn push(&self, dx: Float, dy: Float, triangle: &Triangle) -> Option<Point3> {
        let body = self.body();

        // a sweep only closes distance along its own axis; the static axis
        // can reject outright
        if is_zero(dx)
            && (body.minx() > triangle.aabb.max.x || body.maxx() < triangle.aabb.min.x)
        {
            return None;
        }
        if is_zero(dy)
            && (body.miny() > triangle.aabb.max.y || body.maxy() < triangle.aabb.min.y)
        {
            return None;
        }
        if triangle.aabb.max.z < body.location.z {
            return None;
        }

        // perpendicular distance of the bounding-circle centre from the
        // sweep line through the tool axis
        let c = &triangle.center;
        let offset = (c.x - body.location.x) * dy - (c.y - body.location.y) * dx;
        if offset.abs() > body.radius + triangle.radius {
            return None;
        }

        self.intersect(&Vec3::new(dx, dy, 0.0), triangle)
            .map(|c| c.location)
    }
}

/// Location-free shape identity of a cutter.
///
/// Equal keys mean interchangeable tools; ordering is canonical so
/// strategy code can sort and deduplicate mixed collections. Radii are
/// finite by construction, which makes the float comparison total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKey {
    /// Flat end mill.
    Cylindrical {
        /// Nominal radius.
        radius: Float,
    },
    /// Bull-nose (or ball, when `major_radius == 0`) end mill.
    Toroidal {
        /// Nominal radius.
        radius: Float,
        /// Ring radius.
        major_radius: Float,
        /// Corner radius.
        minor_radius: Float,
    },
}

impl ShapeKey {
    fn class_name(&self) -> &'static str {
        match self {
            ShapeKey::Cylindrical { .. } => "cylindrical",
            ShapeKey::Toroidal { .. } => "toroidal",
        }
    }

    fn dims(&self) -> [Float; 3] {
        match *self {
            ShapeKey::Cylindrical { radius } => [radius, 0.0, 0.0],
            ShapeKey::Toroidal {
                radius,
                major_radius,
                minor_radius,
            } => [radius, major_radius, minor_radius],
        }
    }
}

impl Eq for ShapeKey {}

impl Ord for ShapeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // different classes fall back to canonical name order
        self.class_name()
            .cmp(other.class_name())
            .then_with(|| {
                let a = self.dims();
                let b = other.dims();
                a[0].total_cmp(&b[0])
                    .then(a[1].total_cmp(&b[1]))
                    .then(a[2].total_cmp(&b[2]))
            })
    }
}

impl PartialOrd for ShapeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two cutters by shape only, ignoring location.
pub fn cmp_shape(a: &dyn Cutter, b: &dyn Cutter) -> Ordering {
    a.shape_key().cmp(&b.shape_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CylindricalCutter, ToroidalCutter};

    fn slope() -> Triangle {
        // rises from z=0 at y=0 to z=10 at y=10
        Triangle::new(
            Point3::new(-10.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 10.0),
        )
    }

    fn flat() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        )
    }

    #[test]
    fn test_broad_phase_never_hides_a_contact() {
        // wherever drop() rejects, the full dispatch must miss as well
        let mut cutter = CylindricalCutter::new(2.0).unwrap();
        let t = flat();
        for ix in -12..24 {
            for iy in -12..24 {
                let loc = Point3::new(ix as Float, iy as Float, 20.0);
                cutter.move_to(loc);
                let dropped = cutter.drop(&t);
                if dropped.is_none() {
                    assert!(
                        cutter.intersect(&vertical(), &t).is_none(),
                        "broad-phase rejected a real contact at {loc:?}"
                    );
                } else {
                    let cl = dropped.unwrap();
                    assert!((cl.x - loc.x).abs() < 1e-12);
                    assert!((cl.y - loc.y).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_inflation_raises_the_contact() {
        let t = slope();
        let mut cutter = CylindricalCutter::new(2.0).unwrap();
        cutter.move_to(Point3::new(0.0, 5.0, 50.0));
        let lean = cutter.drop(&t).unwrap();

        cutter.set_required_distance(1.0);
        let fat = cutter.drop(&t).unwrap();
        assert!(
            fat.z >= lean.z - 1e-12,
            "inflated cutter must contact at or above: {} vs {}",
            fat.z,
            lean.z
        );
    }

    #[test]
    fn test_drop_is_translation_invariant() {
        let shift = Vec3::new(13.0, -7.0, 4.0);
        let t = slope();
        let t_shifted = Triangle::new(t.p1 + shift, t.p2 + shift, t.p3 + shift);

        let mut cutter = ToroidalCutter::new(3.0, 1.0).unwrap();
        cutter.move_to(Point3::new(1.0, 4.0, 60.0));
        let base = cutter.drop(&t).unwrap();

        cutter.move_to(Point3::new(1.0, 4.0, 60.0) + shift);
        let moved = cutter.drop(&t_shifted).unwrap();
        assert!((moved - base - shift).norm() < 1e-9);
    }

    #[test]
    fn test_drop_is_deterministic_across_threads() {
        let t = std::sync::Arc::new(slope());
        let expected = {
            let mut cutter = ToroidalCutter::new(3.0, 1.0).unwrap();
            cutter.move_to(Point3::new(0.5, 4.5, 80.0));
            cutter.drop(&t).unwrap()
        };

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = t.clone();
                std::thread::spawn(move || {
                    let mut cutter = ToroidalCutter::new(3.0, 1.0).unwrap();
                    cutter.move_to(Point3::new(0.5, 4.5, 80.0));
                    cutter.drop(&t).unwrap()
                })
            })
            .collect();
        for h in handles {
            let got = h.join().unwrap();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_composed_drop_takes_the_earlier_contact() {
        // two stacked horizontal faces: the higher one must win the argmin
        let low = flat();
        let high = Triangle::new(
            Point3::new(0.0, 0.0, 4.0),
            Point3::new(10.0, 0.0, 4.0),
            Point3::new(0.0, 10.0, 4.0),
        );
        let mut cutter = CylindricalCutter::new(1.0).unwrap();
        cutter.move_to(Point3::new(2.0, 2.0, 30.0));

        let best = [&low, &high]
            .into_iter()
            .filter_map(|t| cutter.intersect(&vertical(), t))
            .reduce(|a, b| if a.distance <= b.distance { a } else { b })
            .unwrap();
        assert!((best.location.z - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_move_to_is_idempotent() {
        let p = Point3::new(3.0, -2.0, 9.0);
        let mut once = ToroidalCutter::new(4.0, 1.5).unwrap();
        once.move_to(p);
        let mut twice = ToroidalCutter::new(4.0, 1.5).unwrap();
        twice.move_to(p);
        twice.move_to(p);

        assert_eq!(once.body().location, twice.body().location);
        assert_eq!(once.center(), twice.center());
        let t = slope();
        assert_eq!(once.drop(&t), twice.drop(&t));
    }

    #[test]
    fn test_shape_key_ordering() {
        let small = ShapeKey::Cylindrical { radius: 2.0 };
        let large = ShapeKey::Cylindrical { radius: 5.0 };
        let bull = ShapeKey::Toroidal {
            radius: 2.0,
            major_radius: 1.0,
            minor_radius: 1.0,
        };
        assert!(small < large);
        assert_eq!(small, ShapeKey::Cylindrical { radius: 2.0 });
        // classes order by canonical name, regardless of size
        assert!(large < bull);
    }

    #[test]
    fn test_cmp_shape_ignores_location() {
        let mut a = CylindricalCutter::new(2.0).unwrap();
        let b = CylindricalCutter::new(2.0).unwrap();
        a.move_to(Point3::new(100.0, 100.0, 100.0));
        assert_eq!(cmp_shape(&a, &b), Ordering::Equal);
    }
}
