#![warn(missing_docs)]

//! Cutter shapes and first-contact dispatch for the millkern CAM kernel.
//!
//! A cutter is a rigid body of revolution around +Z, positioned by its tip.
//! Every toolpath strategy reduces to two questions answered here: how far
//! can the tool *drop* before touching a triangle, and how far can it
//! *push* sideways. Each shape decomposes the triangle into its plane,
//! edges and vertices, runs the matching sweep sub-routines from
//! `millkern_geom`, and keeps the earliest contact.
//!
//! # Architecture
//!
//! - [`Cutter`] - the capability: `move_to`, `set_required_distance`,
//!   `intersect`, plus the broad-phase `drop` / `push` façade
//! - [`CylindricalCutter`] - flat end mill (disc + side wall)
//! - [`ToroidalCutter`] - bull-nose end mill (tip disc + fillet + shaft);
//!   [`ToroidalCutter::ball`] for ball end mills
//! - [`CutterSpec`] - serde-tagged construction options
//! - [`CollisionProxy`] / [`PreviewPrim`] - value-typed hand-offs to
//!   external broad-phase engines and renderers
//!
//! # Example
//!
//! ```
//! use millkern_cutters::{Cutter, CylindricalCutter};
//! use millkern_geom::Triangle;
//! use millkern_math::Point3;
//!
//! let face = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     Point3::new(0.0, 10.0, 0.0),
//! );
//!
//! let mut cutter = CylindricalCutter::new(3.0).unwrap();
//! cutter.move_to(Point3::new(2.0, 2.0, 50.0));
//!
//! // the tool drops 50 units and rests on the face
//! let contact = cutter.drop(&face).unwrap();
//! assert!((contact.z - 0.0).abs() < 1e-9);
//! ```

mod body;
mod config;
mod cutter;
mod cylindrical;
mod error;
mod preview;
mod proxy;
mod toroidal;

pub use body::{CutterBody, DEFAULT_HEIGHT};
pub use config::CutterSpec;
pub use cutter::{cmp_shape, Contact, Cutter, ShapeKey};
pub use cylindrical::CylindricalCutter;
pub use error::{CutterError, Result};
pub use preview::PreviewPrim;
pub use proxy::{CollisionEngine, CollisionProxy, ProxyPart};
pub use toroidal::ToroidalCutter;
