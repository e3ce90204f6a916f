use crate::{
    common::is_zero,
    shape::{points_along, radial::RadialGeometry, Geometry, Intersectable},
    Point, Ray, Result, Vector,
};

/// An infinite open tube of the given radius around `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    axis: Ray,
    radial: RadialGeometry,
}

impl Tube {
    pub fn new(axis: Ray, radius: f64) -> Result<Self> {
        Ok(Self {
            axis,
            radial: RadialGeometry::new(radius)?,
        })
    }

    pub fn axis(&self) -> Ray {
        self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radial.radius()
    }

    pub fn radius_squared(&self) -> f64 {
        self.radial.radius_squared()
    }

    /// Signed distance along the axis to the projection of `point`.
    pub fn axis_parameter(&self, point: &Point) -> f64 {
        (point.triple() - self.axis.origin().triple()).dot(&self.axis.direction().triple())
    }

    /// Solves for the ray parameters where the ray's line crosses the tube wall.
    /// Returns them in increasing order, including those behind the origin,
    /// or None for rays parallel to the axis, tangent rays and misses.
    pub(crate) fn wall_parameters(&self, ray: &Ray) -> Option<(f64, f64)> {
        let axis_direction = self.axis.direction().triple();
        let direction = ray.direction().triple();
        let offset = ray.origin().triple() - self.axis.origin().triple();

        // drop the components along the axis
        let direction = direction - axis_direction * direction.dot(&axis_direction);
        let offset = offset - axis_direction * offset.dot(&axis_direction);

        // |direction| is the sine of the angle between the ray and the axis
        let a = direction.dot(&direction);
        if is_zero(a.sqrt()) {
            return None;
        }

        // closest approach to the axis, measured across it
        let tm = -direction.dot(&offset) / a;
        let miss = offset + direction * tm;
        let radius_squared = self.radial.radius_squared();
        let inside = radius_squared - miss.dot(&miss);
        if inside <= 0. || is_zero(inside / radius_squared) {
            return None;
        }

        let th = (inside / a).sqrt();
        Some((tm - th, tm + th))
    }
}

impl Intersectable for Tube {
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        let (t1, t2) = self.wall_parameters(ray)?;
        points_along(ray, [t1, t2])
    }
}

impl Geometry for Tube {
    /// Fails with `GeometryError::DegenerateVector` for points on the axis.
    fn normal_at(&self, point: &Point) -> Result<Vector> {
        let t = self.axis_parameter(point);
        let foot = if is_zero(t) {
            self.axis.origin()
        } else {
            self.axis.position(t)
        };
        Ok(point.subtract(&foot)?.normalize())
    }
}
