mod common;
mod error;
pub mod geometries;
mod point;
mod ray;
pub mod shape;
mod triple;
mod vector;

pub use common::{equal, is_zero, EPSILON};
pub use error::GeometryError;
pub use geometries::Geometries;
pub use point::Point;
pub use ray::Ray;
pub use shape::{Geometry, Intersectable, Shape, ShapeType};
pub use triple::Triple;
pub use vector::Vector;

pub type Result<T> = std::result::Result<T, GeometryError>;

pub mod prelude {
    pub use crate::shape::{
        cylinder::Cylinder, plane::Plane, radial::RadialGeometry, sphere::Sphere, tube::Tube,
    };
    pub use crate::{
        Geometries, Geometry, GeometryError, Intersectable, Point, Ray, Shape, ShapeType, Triple,
        Vector,
    };
}
