use crate::{
    common::is_zero,
    shape::{points_along, radial::RadialGeometry, Geometry, Intersectable},
    Point, Ray, Result, Vector,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radial: RadialGeometry,
}

impl Sphere {
    /// Fails if the radius is not strictly positive.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        Ok(Self {
            center,
            radial: RadialGeometry::new(radius)?,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radial.radius()
    }
}

impl Intersectable for Sphere {
    /// Tangent rays do not count as intersecting.
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        // from the ray origin to the center
        let to_center = match self.center.subtract(&ray.origin()) {
            Ok(vector) => vector,
            Err(_) => return Some(vec![ray.position(self.radial.radius())]),
        };

        // distance along the ray to the point closest to the center
        let tm = ray.direction().dot(&to_center);
        let miss = to_center.triple() - ray.direction().triple() * tm;
        let th_squared = self.radial.radius_squared() - miss.dot(&miss);
        // tangency is judged relative to the size of the sphere
        if th_squared <= 0. || is_zero(th_squared / self.radial.radius_squared()) {
            return None;
        }

        let th = th_squared.sqrt();
        points_along(ray, [tm - th, tm + th])
    }
}

impl Geometry for Sphere {
    /// Fails with `GeometryError::DegenerateVector` at the center.
    fn normal_at(&self, point: &Point) -> Result<Vector> {
        Ok(point.subtract(&self.center)?.normalize())
    }
}
