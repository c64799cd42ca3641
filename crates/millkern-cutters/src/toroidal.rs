//! Bull-nose (toroidal) and ball end mills.

use millkern_geom::intersect::{
    intersect_circle_line, intersect_circle_plane, intersect_circle_point,
    intersect_cylinder_line, intersect_cylinder_point, intersect_torus_plane,
    intersect_torus_point, SweepHit,
};
use millkern_geom::{Edge, Triangle};
use millkern_math::{is_vertical, Float, Point3, Vec3, EPSILON};

use crate::body::{CutterBody, DEFAULT_HEIGHT};
use crate::cutter::{closer, Contact, Cutter, ShapeKey};
use crate::error::{CutterError, Result};
use crate::preview::PreviewPrim;
use crate::proxy::{CollisionEngine, CollisionProxy};

/// A toroidal (bull-nose) end mill with its axis along +Z.
///
/// Contact regions, bottom to top: the flat disc of radius `major_radius`
/// at the tip, the toroidal corner fillet, and the cylindrical shaft of
/// the full radius above the ring plane. A ball end mill is the
/// `minor_radius == radius` case (ring radius zero); the same dispatch
/// covers it.
///
/// `center` is the centre of the torus ring, `minor_radius` above the
/// reference point. It tracks `location` but not `required_distance`: the
/// inflation grows the tube, not the ring height.
#[derive(Debug, Clone)]
pub struct ToroidalCutter {
    body: CutterBody,
    minor_radius: Float,
    major_radius: Float,
    distance_major_radius: Float,
    distance_minor_radius: Float,
    distance_major_radius_sq: Float,
    distance_minor_radius_sq: Float,
    center: Point3,
}

impl ToroidalCutter {
    /// Bull-nose mill with the default flute length, at the origin.
    pub fn new(radius: Float, minor_radius: Float) -> Result<Self> {
        Self::with_height(radius, minor_radius, DEFAULT_HEIGHT)
    }

    /// Bull-nose mill with an explicit flute length.
    pub fn with_height(radius: Float, minor_radius: Float, height: Float) -> Result<Self> {
        let body = CutterBody::new(radius, height, Point3::origin())?;
        if !(minor_radius > 0.0) {
            return Err(CutterError::InvalidShape(format!(
                "corner radius must be positive, got {minor_radius}"
            )));
        }
        if minor_radius > radius {
            return Err(CutterError::InvalidShape(format!(
                "corner radius {minor_radius} exceeds tool radius {radius}"
            )));
        }
        let major_radius = radius - minor_radius;
        let mut cutter = Self {
            body,
            minor_radius,
            major_radius,
            distance_major_radius: major_radius,
            distance_minor_radius: minor_radius,
            distance_major_radius_sq: major_radius * major_radius,
            distance_minor_radius_sq: minor_radius * minor_radius,
            center: Point3::origin(),
        };
        cutter.refresh_center();
        Ok(cutter)
    }

    /// Ball end mill: corner radius equal to the tool radius.
    pub fn ball(radius: Float) -> Result<Self> {
        Self::new(radius, radius)
    }

    /// Centre of the torus ring.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Ring (major) radius.
    pub fn major_radius(&self) -> Float {
        self.major_radius
    }

    /// Corner (minor) radius.
    pub fn minor_radius(&self) -> Float {
        self.minor_radius
    }

    fn refresh_center(&mut self) {
        self.center = self.body.location + Vec3::z() * self.minor_radius;
    }

    fn refresh_distance_radii(&mut self) {
        let offset = self.body.required_distance();
        self.distance_major_radius = self.major_radius + offset;
        self.distance_minor_radius = self.minor_radius + offset;
        self.distance_major_radius_sq = self.distance_major_radius * self.distance_major_radius;
        self.distance_minor_radius_sq = self.distance_minor_radius * self.distance_minor_radius;
    }

    fn contact(&self, hit: &SweepHit) -> Contact {
        Contact {
            location: self.body.location + (hit.cp - hit.ccp),
            distance: hit.d,
        }
    }

    /// Fillet against the face interior.
    fn torus_triangle(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact> {
        let hit = intersect_torus_plane(
            &self.center,
            &Vec3::z(),
            self.distance_major_radius,
            self.distance_minor_radius,
            direction,
            triangle,
        )?;
        triangle.point_inside(&hit.cp).then(|| self.contact(&hit))
    }

    fn torus_vertex(&self, direction: &Vec3, point: &Point3) -> Option<Contact> {
        let hit = intersect_torus_point(
            &self.center,
            &Vec3::z(),
            self.distance_major_radius,
            self.distance_minor_radius,
            self.distance_major_radius_sq,
            self.distance_minor_radius_sq,
            direction,
            point,
        )?;
        Some(self.contact(&hit))
    }

    /// Fillet against an edge: bracketed sampling plus local refinement.
    ///
    /// There is no closed form for a swept torus against a segment, so the
    /// edge is sampled at `max(3, len / distance_minor_radius * 2)` evenly
    /// spaced parameters and the winner refined with ten substeps across a
    /// `±1/scale` window. A minimum outside the initial bracket can be
    /// missed; the sampling density trades runtime for fidelity.
    fn torus_edge(&self, direction: &Vec3, edge: &Edge) -> Option<Contact> {
        if edge.is_degenerate() {
            return None;
        }
        let scale = ((edge.len / self.distance_minor_radius * 2.0) as usize).max(3);

        let mut best: Option<(Float, Contact)> = None;
        for i in 0..=scale {
            let m = i as Float / scale as Float;
            if let Some(c) = self.torus_vertex(direction, &edge.point_at(m)) {
                if best.as_ref().map_or(true, |(_, b)| c.distance < b.distance) {
                    best = Some((m, c));
                }
            }
        }
        let (center_m, mut best) = best?;

        let scale2 = 10;
        for i in 1..=scale2 {
            let m = center_m + ((i as Float / scale2 as Float) * 2.0 - 1.0) / scale as Float;
            if !(0.0..=1.0).contains(&m) {
                continue;
            }
            if let Some(c) = self.torus_vertex(direction, &edge.point_at(m)) {
                if c.distance < best.distance {
                    best = c;
                }
            }
        }
        Some(best)
    }

    /// Tip disc (radius `major_radius`, at `location`) against the face.
    fn circle_triangle(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact> {
        let hit = intersect_circle_plane(
            &self.body.location,
            self.distance_major_radius,
            direction,
            triangle,
        )?;
        triangle.point_inside(&hit.cp).then(|| self.contact(&hit))
    }

    fn circle_vertex(&self, direction: &Vec3, point: &Point3) -> Option<Contact> {
        let hit = intersect_circle_point(
            &self.body.location,
            &Vec3::z(),
            self.distance_major_radius,
            self.distance_major_radius_sq,
            direction,
            point,
        )?;
        Some(self.contact(&hit))
    }

    fn circle_edge(&self, direction: &Vec3, edge: &Edge) -> Option<Contact> {
        let hit = intersect_circle_line(
            &self.body.location,
            &Vec3::z(),
            self.distance_major_radius,
            self.distance_major_radius_sq,
            direction,
            edge,
        )?;
        let m = edge.projection(&hit.cp);
        if m < 0.0 || m > edge.len {
            return None;
        }
        Some(self.contact(&hit))
    }

    fn shaft_vertex(&self, direction: &Vec3, point: &Point3) -> Option<Contact> {
        let hit = intersect_cylinder_point(
            &self.center,
            &Vec3::z(),
            self.body.distance_radius,
            self.body.distance_radius_sq,
            direction,
            point,
        )?;
        // the shaft only exists above the ring plane
        if hit.ccp.z < self.center.z {
            return None;
        }
        Some(self.contact(&hit))
    }

    fn shaft_edge(&self, direction: &Vec3, edge: &Edge) -> Option<Contact> {
        let hit = intersect_cylinder_line(
            &self.center,
            &Vec3::z(),
            self.body.distance_radius,
            self.body.distance_radius_sq,
            direction,
            edge,
        )?;
        if hit.ccp.z < self.center.z {
            return None;
        }
        let m = edge.projection(&hit.cp);
        if m < 0.0 || m > edge.len {
            return None;
        }
        Some(self.contact(&hit))
    }
}

impl Cutter for ToroidalCutter {
    fn body(&self) -> &CutterBody {
        &self.body
    }

    fn move_to(&mut self, location: Point3) {
        self.body.set_location(location);
        self.refresh_center();
    }

    fn set_required_distance(&mut self, value: Float) {
        if self.body.set_required_distance(value) {
            self.refresh_distance_radii();
        }
    }

    fn intersect(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact> {
        let direction = direction.try_normalize(EPSILON)?;
        let mut best: Option<Contact> = None;

        if let Some(c) = self.torus_triangle(&direction, triangle) {
            best = closer(best, c);
        }
        for edge in triangle.edges() {
            if let Some(c) = self.torus_edge(&direction, edge) {
                best = closer(best, c);
            }
        }
        for point in triangle.vertices() {
            if let Some(c) = self.torus_vertex(&direction, point) {
                best = closer(best, c);
            }
        }

        if let Some(c) = self.circle_triangle(&direction, triangle) {
            best = closer(best, c);
        }
        for point in triangle.vertices() {
            if let Some(c) = self.circle_vertex(&direction, point) {
                best = closer(best, c);
            }
        }
        for edge in triangle.edges() {
            if let Some(c) = self.circle_edge(&direction, edge) {
                best = closer(best, c);
            }
        }

        if !is_vertical(&direction) {
            for point in triangle.vertices() {
                if let Some(c) = self.shaft_vertex(&direction, point) {
                    best = closer(best, c);
                }
            }
            for edge in triangle.edges() {
                if let Some(c) = self.shaft_edge(&direction, edge) {
                    best = closer(best, c);
                }
            }
        }
        best
    }

    fn shape_key(&self) -> ShapeKey {
        ShapeKey::Toroidal {
            radius: self.body.radius,
            major_radius: self.major_radius,
            minor_radius: self.minor_radius,
        }
    }

    fn collision_proxy(&self, engine: CollisionEngine) -> Result<CollisionProxy> {
        match engine {
            // no toroidal primitive in the broad-phase engines; the
            // enclosing cylinder over-approximates
            CollisionEngine::Parry => Ok(CollisionProxy::enclosing_cylinder(&self.body)),
        }
    }

    fn preview(&self) -> Vec<PreviewPrim> {
        vec![
            PreviewPrim::Torus {
                center: self.center,
                major_radius: self.major_radius,
                minor_radius: self.minor_radius,
            },
            PreviewPrim::Cylinder {
                base: self.center,
                radius: self.body.radius,
                height: self.body.height,
            },
            PreviewPrim::Disc {
                center: self.body.location,
                radius: self.major_radius,
            },
        ]
    }
}
