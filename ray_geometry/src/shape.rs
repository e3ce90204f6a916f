use std::fmt;

use crate::{common::is_zero, Point, Ray, Result, Vector};

pub mod cylinder;
pub mod plane;
pub mod radial;
pub mod sphere;
pub mod tube;

use cylinder::Cylinder;
use plane::Plane;
use sphere::Sphere;
use tube::Tube;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Plane,
    Sphere,
    Tube,
    Cylinder,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Plane => "plane",
            ShapeType::Sphere => "sphere",
            ShapeType::Tube => "tube",
            ShapeType::Cylinder => "cylinder",
        };
        f.write_str(name)
    }
}

pub trait Intersectable {
    /// Computes the points where the ray meets the surface, ordered by
    /// increasing distance from the ray origin.
    /// Only points strictly ahead of the origin are reported.
    /// Returns None (never an empty Vec) when there are no such points.
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>>;
}

pub trait Geometry: Intersectable {
    /// Computes the outward unit normal at a point on the surface.
    /// The result for points off the surface is unspecified.
    fn normal_at(&self, point: &Point) -> Result<Vector>;
}

/// The closed set of surfaces, dispatched through `Geometry`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Plane(_) => ShapeType::Plane,
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Tube(_) => ShapeType::Tube,
            Shape::Cylinder(_) => ShapeType::Cylinder,
        }
    }
}

impl Intersectable for Shape {
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        match self {
            Shape::Plane(plane) => plane.find_intersections(ray),
            Shape::Sphere(sphere) => sphere.find_intersections(ray),
            Shape::Tube(tube) => tube.find_intersections(ray),
            Shape::Cylinder(cylinder) => cylinder.find_intersections(ray),
        }
    }
}

impl Geometry for Shape {
    fn normal_at(&self, point: &Point) -> Result<Vector> {
        match self {
            Shape::Plane(plane) => plane.normal_at(point),
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Tube(tube) => tube.normal_at(point),
            Shape::Cylinder(cylinder) => cylinder.normal_at(point),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Tube> for Shape {
    fn from(tube: Tube) -> Self {
        Shape::Tube(tube)
    }
}

impl From<Cylinder> for Shape {
    fn from(cylinder: Cylinder) -> Self {
        Shape::Cylinder(cylinder)
    }
}

/// Turns ray parameters into points, dropping those at or behind the origin.
/// Returns None if nothing is left.
pub(crate) fn points_along(ray: &Ray, parameters: impl IntoIterator<Item = f64>) -> Option<Vec<Point>> {
    let mut parameters: Vec<f64> = parameters
        .into_iter()
        .filter(|&t| t > 0. && !is_zero(t))
        .collect();

    if parameters.is_empty() {
        return None;
    }

    parameters.sort_by(f64::total_cmp);
    Some(parameters.into_iter().map(|t| ray.position(t)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::equal;

    fn unit_axis() -> Ray {
        Ray::new(Point::ZERO, Vector::Z)
    }

    fn all_shapes() -> Vec<Shape> {
        vec![
            Plane::new(Point::ZERO, Vector::Z).into(),
            Sphere::new(Point::ZERO, 1.).unwrap().into(),
            Tube::new(unit_axis(), 1.).unwrap().into(),
            Cylinder::new(unit_axis(), 1., 5.).unwrap().into(),
        ]
    }

    #[test]
    fn shape_reports_its_type() {
        let types: Vec<ShapeType> = all_shapes().iter().map(Shape::shape_type).collect();
        assert_eq!(
            types,
            vec![
                ShapeType::Plane,
                ShapeType::Sphere,
                ShapeType::Tube,
                ShapeType::Cylinder
            ]
        );
        assert_eq!(ShapeType::Cylinder.to_string(), "cylinder");
    }

    #[test]
    fn normals_through_shape_are_unit_length() {
        let point = Point::new(1., 0., 0.);
        for shape in all_shapes() {
            let normal = shape.normal_at(&point).unwrap();
            assert!(equal(normal.length(), 1.), "{:?}", shape.shape_type());
        }
    }

    #[test]
    fn shape_dispatches_intersections() {
        let ray = Ray::new(Point::new(0.5, 0., 10.), -Vector::Z);
        let shapes = all_shapes();

        let plane_hits = shapes[0].find_intersections(&ray).unwrap();
        assert_eq!(plane_hits, vec![Point::new(0.5, 0., 0.)]);

        let sphere_hits = shapes[1].find_intersections(&ray).unwrap();
        assert_eq!(sphere_hits.len(), 2);

        // parallel to the tube axis
        assert_eq!(shapes[2].find_intersections(&ray), None);

        let cylinder_hits = shapes[3].find_intersections(&ray).unwrap();
        assert_eq!(
            cylinder_hits,
            vec![Point::new(0.5, 0., 5.), Point::new(0.5, 0., 0.)]
        );
    }

    #[test]
    fn points_along_filters_and_sorts() {
        let ray = Ray::new(Point::ZERO, Vector::X);
        let points = points_along(&ray, [3., -1., 0., 1.]).unwrap();
        assert_eq!(points, vec![Point::new(1., 0., 0.), Point::new(3., 0., 0.)]);
        assert_eq!(points_along(&ray, [-2., 0.]), None);
        assert_eq!(points_along(&ray, []), None);
    }
}
