//! Primitive surfaces for external renderers.

use millkern_math::{Float, Point3};

/// One primitive of a cutter's visual shell.
///
/// A renderer turns these into whatever representation it needs (quadric
/// meshes, signed distance fields, line previews); the kernel only names
/// the surfaces and their poses. Cylinders and discs are Z-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewPrim {
    /// A filled disc perpendicular to the tool axis.
    Disc {
        /// Disc centre.
        center: Point3,
        /// Disc radius.
        radius: Float,
    },
    /// A cylinder wall extending upward from its base.
    Cylinder {
        /// Centre of the bottom circle.
        base: Point3,
        /// Cylinder radius.
        radius: Float,
        /// Extent along +Z.
        height: Float,
    },
    /// A torus with its ring in a horizontal plane.
    Torus {
        /// Ring centre.
        center: Point3,
        /// Ring radius.
        major_radius: Float,
        /// Tube radius.
        minor_radius: Float,
    },
}
