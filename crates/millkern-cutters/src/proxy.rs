//! Broad-phase collision proxies.
//!
//! Strategy code may hand tools to an external collision engine for
//! coarse clearance checks. The cutter produces a proxy *value*; the
//! engine owns it and positions it (the kernel keeps no engine handles).
//! Proxies over-approximate: a toroidal cutter is represented by its
//! enclosing cylinder, which is fine for broad-phase rejection and never
//! consulted for exact contact math.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Isometry3, Vector3};
use parry3d::shape::{Compound, Cylinder, SharedShape};

use millkern_math::{Float, Vec3};

use crate::body::CutterBody;

/// Broad-phase engines a proxy can be produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEngine {
    /// The parry3d narrow/broad-phase library (used by rapier worlds).
    Parry,
}

/// One convex piece of a collision proxy: a Z-aligned cylinder, placed
/// relative to the tool reference point (tip).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyPart {
    /// Cylinder radius.
    pub radius: Float,
    /// Half of the cylinder height.
    pub half_height: Float,
    /// Offset of the cylinder centre from the tool tip.
    pub center_offset: Vec3,
}

/// A composite, tip-anchored collision stand-in for a cutter.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionProxy {
    /// Convex pieces, in decreasing order of collision likelihood.
    pub parts: Vec<ProxyPart>,
}

impl CollisionProxy {
    /// The inflated cylinder that encloses a tool: `distance_radius` wide,
    /// extended downward by `required_distance` so the inflation also
    /// covers the tip region.
    pub fn enclosing_cylinder(body: &CutterBody) -> Self {
        let offset = body.required_distance();
        let full_height = body.height + offset;
        Self {
            parts: vec![ProxyPart {
                radius: body.distance_radius,
                half_height: full_height / 2.0,
                center_offset: Vec3::new(0.0, 0.0, full_height / 2.0 - offset),
            }],
        }
    }

    /// Convert into a parry3d compound shape.
    ///
    /// Parry cylinders are Y-aligned, so each part is rotated about X to
    /// stand along +Z. The caller positions the compound by placing its
    /// origin at the tool tip.
    pub fn to_shared_shape(&self) -> SharedShape {
        let parts = self
            .parts
            .iter()
            .map(|p| {
                let iso = Isometry3::new(
                    Vector3::new(
                        p.center_offset.x as f32,
                        p.center_offset.y as f32,
                        p.center_offset.z as f32,
                    ),
                    Vector3::x() * FRAC_PI_2,
                );
                (
                    iso,
                    SharedShape::new(Cylinder::new(p.half_height as f32, p.radius as f32)),
                )
            })
            .collect();
        SharedShape::new(Compound::new(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millkern_math::Point3;

    #[test]
    fn test_enclosing_cylinder_covers_the_tool() {
        let mut body = CutterBody::new(3.0, 20.0, Point3::origin()).unwrap();
        body.set_required_distance(1.0);
        let proxy = CollisionProxy::enclosing_cylinder(&body);
        assert_eq!(proxy.parts.len(), 1);
        let part = &proxy.parts[0];
        assert!((part.radius - 4.0).abs() < 1e-12);
        // spans tip - required_distance up to the flute top
        let bottom = part.center_offset.z - part.half_height;
        let top = part.center_offset.z + part.half_height;
        assert!((bottom + 1.0).abs() < 1e-12);
        assert!((top - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_parry_compound_has_one_piece() {
        let body = CutterBody::new(3.0, 20.0, Point3::origin()).unwrap();
        let shape = CollisionProxy::enclosing_cylinder(&body).to_shared_shape();
        let compound = shape.as_compound().expect("compound shape");
        assert_eq!(compound.shapes().len(), 1);
    }
}
