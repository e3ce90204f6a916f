use tracing::debug;

use crate::{
    common::is_zero,
    error::GeometryError,
    shape::{points_along, Geometry, Intersectable},
    Point, Ray, Result, Vector,
};

/// An infinite plane through `point`, facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Vector,
}

impl Plane {
    /// The normal is normalized before it is stored.
    pub fn new(point: Point, normal: Vector) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Builds the plane through three distinct, non-collinear points.
    /// The normal follows the right-hand rule over (p2 - p1) x (p3 - p1).
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> Result<Self> {
        let normal = p2
            .subtract(&p1)
            .and_then(|u| u.cross(&p3.subtract(&p1)?))
            .map_err(|_| {
                debug!(%p1, %p2, %p3, "points do not define a plane");
                GeometryError::InvalidPlaneDefinition
            })?;

        Ok(Self::new(p1, normal))
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }
}

impl Intersectable for Plane {
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        let denominator = self.normal.dot(&ray.direction());
        // parallel to the plane, or lying in it
        if is_zero(denominator) {
            return None;
        }

        // a ray starting at the reference point starts on the plane
        let to_plane = self.point.subtract(&ray.origin()).ok()?;
        let t = self.normal.dot(&to_plane) / denominator;
        points_along(ray, [t])
    }
}

impl Geometry for Plane {
    fn normal_at(&self, _point: &Point) -> Result<Vector> {
        // Every single point on the plane has the same normal
        Ok(self.normal)
    }
}
