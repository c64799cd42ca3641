//! Flat end mill.

use millkern_geom::intersect::{
    intersect_circle_line, intersect_circle_plane, intersect_circle_point,
    intersect_cylinder_line, intersect_cylinder_point, SweepHit,
};
use millkern_geom::{Edge, Triangle};
use millkern_math::{is_vertical, Float, Point3, Vec3, EPSILON};

use crate::body::{CutterBody, DEFAULT_HEIGHT};
use crate::cutter::{closer, Contact, Cutter, ShapeKey};
use crate::error::Result;
use crate::preview::PreviewPrim;
use crate::proxy::{CollisionEngine, CollisionProxy};

/// A cylindrical (flat) end mill with its axis along +Z.
///
/// Contact regions: the flat bottom disc and the cylindrical side wall.
/// `center` is the centre of the bottom disc; it sits `required_distance`
/// below the reference point so that offset inflation also grows the tool
/// downward.
#[derive(Debug, Clone)]
pub struct CylindricalCutter {
    body: CutterBody,
    center: Point3,
}

impl CylindricalCutter {
    /// Flat end mill with the default flute length, at the origin.
    pub fn new(radius: Float) -> Result<Self> {
        Self::with_height(radius, DEFAULT_HEIGHT)
    }

    /// Flat end mill with an explicit flute length.
    pub fn with_height(radius: Float, height: Float) -> Result<Self> {
        let body = CutterBody::new(radius, height, Point3::origin())?;
        let mut cutter = Self {
            body,
            center: Point3::origin(),
        };
        cutter.refresh_center();
        Ok(cutter)
    }

    /// Centre of the bottom disc.
    pub fn center(&self) -> Point3 {
        self.center
    }

    fn refresh_center(&mut self) {
        self.center = self.body.location - Vec3::z() * self.body.required_distance();
    }

    /// Lift a sub-routine hit to the cutter reference point.
    fn contact(&self, hit: &SweepHit) -> Contact {
        Contact {
            location: self.body.location + (hit.cp - hit.ccp),
            distance: hit.d,
        }
    }

    fn circle_triangle(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact> {
        let hit = intersect_circle_plane(
            &self.center,
            self.body.distance_radius,
            direction,
            triangle,
        )?;
        triangle.point_inside(&hit.cp).then(|| self.contact(&hit))
    }

    fn circle_vertex(&self, direction: &Vec3, point: &Point3) -> Option<Contact> {
        let hit = intersect_circle_point(
            &self.center,
            &Vec3::z(),
            self.body.distance_radius,
            self.body.distance_radius_sq,
            direction,
            point,
        )?;
        Some(self.contact(&hit))
    }

    fn circle_edge(&self, direction: &Vec3, edge: &Edge) -> Option<Contact> {
        let hit = intersect_circle_line(
            &self.center,
            &Vec3::z(),
            self.body.distance_radius,
            self.body.distance_radius_sq,
            direction,
            edge,
        )?;
        let m = edge.projection(&hit.cp);
        if m < 0.0 || m > edge.len {
            return None;
        }
        Some(self.contact(&hit))
    }

    fn side_vertex(&self, direction: &Vec3, point: &Point3) -> Option<Contact> {
        let hit = intersect_cylinder_point(
            &self.center,
            &Vec3::z(),
            self.body.distance_radius,
            self.body.distance_radius_sq,
            direction,
            point,
        )?;
        // below the bottom disc the side wall does not exist
        if hit.ccp.z < self.center.z {
            return None;
        }
        Some(self.contact(&hit))
    }

    fn side_edge(&self, direction: &Vec3, edge: &Edge) -> Option<Contact> {
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

impl Cutter for CylindricalCutter {
    fn body(&self) -> &CutterBody {
        &self.body
    }

    fn move_to(&mut self, location: Point3) {
        self.body.set_location(location);
        self.refresh_center();
    }

    fn set_required_distance(&mut self, value: Float) {
        if self.body.set_required_distance(value) {
            self.refresh_center();
        }
    }

    fn intersect(&self, direction: &Vec3, triangle: &Triangle) -> Option<Contact> {
        let direction = direction.try_normalize(EPSILON)?;
        let vertical = is_vertical(&direction);
        let mut best: Option<Contact> = None;

        // bottom disc against the face interior; a vertical drop that hits
        // the face cannot be beaten by any other region
        if let Some(c) = self.circle_triangle(&direction, triangle) {
            best = closer(best, c);
        }
        if vertical && best.is_some() {
            return best;
        }

        for edge in triangle.edges() {
            if let Some(c) = self.circle_edge(&direction, edge) {
                best = closer(best, c);
            }
        }
        if vertical && best.is_some() {
            return best;
        }

        for point in triangle.vertices() {
            if let Some(c) = self.circle_vertex(&direction, point) {
                best = closer(best, c);
            }
        }
        if vertical && best.is_some() {
            return best;
        }

        if !vertical {
            for point in triangle.vertices() {
                if let Some(c) = self.side_vertex(&direction, point) {
                    best = closer(best, c);
                }
            }
            for edge in triangle.edges() {
                if let Some(c) = self.side_edge(&direction, edge) {
                    best = closer(best, c);
                }
            }
        }
        best
    }

    fn shape_key(&self) -> ShapeKey {
        ShapeKey::Cylindrical {
            radius: self.body.radius,
        }
    }

    fn collision_proxy(&self, engine: CollisionEngine) -> Result<CollisionProxy> {
        match engine {
            CollisionEngine::Parry => Ok(CollisionProxy::enclosing_cylinder(&self.body)),
        }
    }

    fn preview(&self) -> Vec<PreviewPrim> {
        vec![
            PreviewPrim::Cylinder {
                base: self.center,
                radius: self.body.radius,
                height: self.body.height,
            },
            PreviewPrim::Disc {
                center: self.center,
                radius: self.body.radius,
            },
        ]
    }
}
