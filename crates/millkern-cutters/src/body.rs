//! Shared cutter state and derived broad-phase bounds.

use std::sync::atomic::{AtomicU64, Ordering};

use millkern_math::{Float, Point3};

use crate::error::{CutterError, Result};

/// Flute length used when a cutter is built without an explicit height.
pub const DEFAULT_HEIGHT: Float = 10.0;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// The fields every cutter shape shares, with their derived values.
///
/// `location` is the tool reference point: on the axis, at the z-minimum
/// of the cutting surface (the tip). `required_distance` inflates the tool
/// radially for offset toolpaths; all `distance_*` fields are re-derived
/// together whenever it changes.
#[derive(Debug, Clone)]
pub struct CutterBody {
    /// Process-unique id, assigned at construction (debug/logging only).
    pub id: u64,
    /// Tool reference point (tip, on the axis).
    pub location: Point3,
    /// Nominal tool radius.
    pub radius: Float,
    /// Squared nominal radius.
    pub radius_sq: Float,
    /// Flute length.
    pub height: Float,
    required_distance: Float,
    /// Inflated radius: `radius + required_distance`.
    pub distance_radius: Float,
    /// Squared inflated radius.
    pub distance_radius_sq: Float,
}

impl CutterBody {
    /// Validate and build the shared record.
    pub fn new(radius: Float, height: Float, location: Point3) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(CutterError::InvalidShape(format!(
                "radius must be positive, got {radius}"
            )));
        }
        if !(height > 0.0) {
            return Err(CutterError::InvalidShape(format!(
                "height must be positive, got {height}"
            )));
        }
        Ok(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            location,
            radius,
            radius_sq: radius * radius,
            height,
            required_distance: 0.0,
            distance_radius: radius,
            distance_radius_sq: radius * radius,
        })
    }

    /// Current offset inflation.
    pub fn required_distance(&self) -> Float {
        self.required_distance
    }

    /// Update the offset inflation and every `distance_*` field with it.
    ///
    /// Negative values are silently ignored; returns whether the value was
    /// applied (so shapes with extra derived radii know to re-derive too).
    pub(crate) fn set_required_distance(&mut self, value: Float) -> bool {
        if !(value >= 0.0) {
            return false;
        }
        self.required_distance = value;
        self.distance_radius = self.radius + value;
        self.distance_radius_sq = self.distance_radius * self.distance_radius;
        true
    }

    pub(crate) fn set_location(&mut self, location: Point3) {
        self.location = location;
    }

    /// Lower X bound of the inflated tool footprint.
    pub fn minx(&self) -> Float {
        self.location.x - self.distance_radius
    }

    /// Upper X bound of the inflated tool footprint.
    pub fn maxx(&self) -> Float {
        self.location.x + self.distance_radius
    }

    /// Lower Y bound of the inflated tool footprint.
    pub fn miny(&self) -> Float {
        self.location.y - self.distance_radius
    }

    /// Upper Y bound of the inflated tool footprint.
    pub fn maxy(&self) -> Float {
        self.location.y + self.distance_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(CutterBody::new(-1.0, 10.0, Point3::origin()).is_err());
        assert!(CutterBody::new(0.0, 10.0, Point3::origin()).is_err());
        assert!(CutterBody::new(3.0, -2.0, Point3::origin()).is_err());
        assert!(CutterBody::new(Float::NAN, 10.0, Point3::origin()).is_err());
    }

    #[test]
    fn test_distance_fields_follow_required_distance() {
        let mut body = CutterBody::new(3.0, 10.0, Point3::origin()).unwrap();
        assert!((body.distance_radius - 3.0).abs() < 1e-12);

        assert!(body.set_required_distance(0.5));
        assert!((body.distance_radius - 3.5).abs() < 1e-12);
        assert!((body.distance_radius_sq - 12.25).abs() < 1e-12);

        // negative values are ignored, keeping the previous state
        assert!(!body.set_required_distance(-1.0));
        assert!((body.distance_radius - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_xy_bounds() {
        let mut body = CutterBody::new(2.0, 10.0, Point3::new(10.0, -5.0, 3.0)).unwrap();
        body.set_required_distance(1.0);
        assert!((body.minx() - 7.0).abs() < 1e-12);
        assert!((body.maxx() - 13.0).abs() < 1e-12);
        assert!((body.miny() + 8.0).abs() < 1e-12);
        assert!((body.maxy() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = CutterBody::new(1.0, 10.0, Point3::origin()).unwrap();
        let b = CutterBody::new(1.0, 10.0, Point3::origin()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
