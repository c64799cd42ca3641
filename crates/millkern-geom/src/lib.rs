#![warn(missing_docs)]

//! Triangle model and contact-point geometry for the millkern CAM kernel.
//!
//! This crate holds the stationary side of the tool–surface intersection
//! problem: planes, directed edges, and triangles with their precomputed
//! broad-phase data, plus the pure sweep sub-routines in [`intersect`] that
//! move a cutter element (circle, cylinder surface, torus surface) against
//! a stationary primitive (plane, point, line).
//!
//! # Architecture
//!
//! - [`Plane`] - point/normal form with line intersection
//! - [`Edge`] - directed segment with unit direction and length
//! - [`Triangle`] - vertices, edges, plane, centroid, bounding circle, AABB
//! - [`intersect`] - closed-form sweep tests, one module per cutter element
//!
//! Everything here is free of cutter state; the cutter crates compose these
//! into per-shape first-contact dispatch.

mod edge;
mod plane;
mod triangle;

pub mod intersect;

pub use edge::Edge;
pub use plane::Plane;
pub use triangle::{Aabb, Triangle};
