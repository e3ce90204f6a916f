use tracing::debug;

use crate::{
    common::is_zero,
    error::GeometryError,
    shape::{points_along, tube::Tube, Geometry, Intersectable},
    Point, Ray, Result, Vector,
};

/// A tube cut to `height` along its axis and closed by two flat caps,
/// at axis parameter 0 and at `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
}

impl Cylinder {
    pub fn new(axis: Ray, radius: f64, height: f64) -> Result<Self> {
        let tube = Tube::new(axis, radius)?;
        if !(height > 0.) {
            debug!(height, "rejecting non-positive height");
            return Err(GeometryError::InvalidShapeParameter(format!(
                "height must be positive, got {height}"
            )));
        }

        Ok(Self { tube, height })
    }

    pub fn axis(&self) -> Ray {
        self.tube.axis()
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Ray parameter where the ray crosses the disc of a cap, if it does.
    fn cap_parameter(&self, ray: &Ray, center: Point) -> Option<f64> {
        let axis_direction = self.axis().direction().triple();
        let denominator = axis_direction.dot(&ray.direction().triple());
        if is_zero(denominator) {
            return None;
        }

        let t = axis_direction.dot(&(center.triple() - ray.origin().triple())) / denominator;
        // the disc is closed, its rim included
        let radius = self.radius();
        let outside = ray.position(t).distance(&center) - radius;
        if outside > 0. && !is_zero(outside / radius) {
            return None;
        }
        Some(t)
    }
}

impl Intersectable for Cylinder {
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        let mut parameters = Vec::with_capacity(4);

        // the wall only counts strictly between the caps, the rims belong to the caps
        if let Some((t1, t2)) = self.tube.wall_parameters(ray) {
            for t in [t1, t2] {
                let along = self.tube.axis_parameter(&ray.position(t));
                let between_caps = along > 0.
                    && !is_zero(along)
                    && along < self.height
                    && !is_zero(along - self.height);
                if between_caps {
                    parameters.push(t);
                }
            }
        }

        let axis = self.axis();
        for center in [axis.origin(), axis.position(self.height)] {
            parameters.extend(self.cap_parameter(ray, center));
        }

        points_along(ray, parameters)
    }
}

impl Geometry for Cylinder {
    /// Points on a rim are given the cap normal.
    fn normal_at(&self, point: &Point) -> Result<Vector> {
        let direction = self.axis().direction();
        let t = self.tube.axis_parameter(point);

        if is_zero(t) {
            return Ok(-direction);
        }

        if is_zero(t - self.height) {
            return Ok(direction);
        }

        self.tube.normal_at(point)
    }
}
