//! Serde-friendly cutter descriptions.
//!
//! Strategy configuration names tools declaratively; [`CutterSpec`]
//! carries the recognized options (`radius` required, `height` and
//! `location` optional) and builds the concrete cutter on demand.

use serde::{Deserialize, Serialize};

use millkern_math::{Float, Point3};

use crate::body::DEFAULT_HEIGHT;
use crate::cutter::Cutter;
use crate::cylindrical::CylindricalCutter;
use crate::error::Result;
use crate::toroidal::ToroidalCutter;

fn default_height() -> Float {
    DEFAULT_HEIGHT
}

fn default_location() -> [Float; 3] {
    [0.0, 0.0, 0.0]
}

/// A cutter description as found in job configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CutterSpec {
    /// Flat end mill.
    Cylindrical {
        /// Nominal tool radius.
        radius: Float,
        /// Flute length.
        #[serde(default = "default_height")]
        height: Float,
        /// Initial tip position.
        #[serde(default = "default_location")]
        location: [Float; 3],
    },
    /// Bull-nose end mill.
    Toroidal {
        /// Nominal tool radius.
        radius: Float,
        /// Corner radius (`0 < minor_radius <= radius`).
        minor_radius: Float,
        /// Flute length.
        #[serde(default = "default_height")]
        height: Float,
        /// Initial tip position.
        #[serde(default = "default_location")]
        location: [Float; 3],
    },
    /// Ball end mill (bull nose with full corner radius).
    Ball {
        /// Nominal tool radius.
        radius: Float,
        /// Flute length.
        #[serde(default = "default_height")]
        height: Float,
        /// Initial tip position.
        #[serde(default = "default_location")]
        location: [Float; 3],
    },
}

impl CutterSpec {
    /// Validate the description and build the cutter.
    pub fn build(&self) -> Result<Box<dyn Cutter>> {
        match *self {
            CutterSpec::Cylindrical {
                radius,
                height,
                location,
            } => {
                let mut cutter = CylindricalCutter::with_height(radius, height)?;
                cutter.move_to(Point3::new(location[0], location[1], location[2]));
                Ok(Box::new(cutter))
            }
            CutterSpec::Toroidal {
                radius,
                minor_radius,
                height,
                location,
            } => {
                let mut cutter = ToroidalCutter::with_height(radius, minor_radius, height)?;
                cutter.move_to(Point3::new(location[0], location[1], location[2]));
                Ok(Box::new(cutter))
            }
            CutterSpec::Ball {
                radius,
                height,
                location,
            } => {
                let mut cutter = ToroidalCutter::with_height(radius, radius, height)?;
                cutter.move_to(Point3::new(location[0], location[1], location[2]));
                Ok(Box::new(cutter))
            }
        }
    }
}
