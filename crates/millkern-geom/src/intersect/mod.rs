//! Sweep contact tests between a moving cutter element and a stationary
//! primitive.
//!
//! Each function slides one element of a cutter surface (its bottom disc,
//! its cylindrical side wall, or its toroidal fillet) along a sweep
//! direction and reports the first contact with a plane, a point, or a
//! line. All functions are pure; cutter state lives in the cutter crates.
//!
//! # Conventions
//!
//! - `direction` is a unit sweep vector. The vertical-drop convention is
//!   `(0, 0, -1)`; lateral pushes have `direction.z == 0`.
//! - The result is a [`SweepHit`]: the contact point on the cutter element
//!   *at its current position* (`ccp`), the contact point on the model
//!   (`cp`), and the sweep distance `d` with `cp == ccp + direction * d`.
//! - Degenerate configurations (sweep parallel to the target, no lateral
//!   component where one is required, tangency misses) and contacts at or
//!   behind the sweep origin (`d <= 0`) return `None` — never NaN.

mod circle;
mod cylinder;
mod poly;
mod torus;

pub use circle::{intersect_circle_line, intersect_circle_plane, intersect_circle_point};
pub use cylinder::{intersect_cylinder_line, intersect_cylinder_point};
pub use poly::{solve_cubic, solve_quadratic, solve_quartic};
pub use torus::{intersect_torus_plane, intersect_torus_point};

use millkern_math::{Float, Point3, EPSILON};

/// First contact of a swept cutter element with a stationary primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Contact point on the cutter element at its current position.
    pub ccp: Point3,
    /// Contact point on the model primitive.
    pub cp: Point3,
    /// Sweep distance to contact (`cp = ccp + direction * d`).
    pub d: Float,
}

impl SweepHit {
    /// Keep only contacts strictly in front of the sweep origin.
    pub(crate) fn in_front(self) -> Option<Self> {
        (self.d > EPSILON).then_some(self)
    }
}
