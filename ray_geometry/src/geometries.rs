use rayon::prelude::*;
use tracing::trace;

use crate::{
    shape::{Intersectable, Shape},
    Point, Ray,
};

/// Below this many shapes a query runs on the calling thread.
const PARALLEL_THRESHOLD: usize = 64;

fn hits_on<'a>(shape: &'a Shape, ray: &Ray) -> impl Iterator<Item = (Point, &'a Shape)> {
    shape
        .find_intersections(ray)
        .unwrap_or_default()
        .into_iter()
        .map(move |point| (point, shape))
}

/// A collection of shapes that is intersected as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometries {
    shapes: Vec<Shape>,
}

impl Geometries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
        }
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Intersects every shape once and pairs each hit with the shape it lies on,
    /// nearest to the ray origin first.
    pub fn hits(&self, ray: &Ray) -> Vec<(Point, &Shape)> {
        let mut hits: Vec<(Point, &Shape)> = if self.shapes.len() >= PARALLEL_THRESHOLD {
            self.shapes
                .par_iter()
                .flat_map_iter(|shape| hits_on(shape, ray))
                .collect()
        } else {
            self.shapes
                .iter()
                .flat_map(|shape| hits_on(shape, ray))
                .collect()
        };

        trace!(shapes = self.shapes.len(), hits = hits.len(), "intersected geometries");

        let origin = ray.origin();
        hits.sort_by(|(a, _), (b, _)| {
            origin
                .distance_squared(a)
                .total_cmp(&origin.distance_squared(b))
        });
        hits
    }

    /// Finds the intersection nearest to the ray origin over all shapes,
    /// together with the shape it lies on.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(Point, &Shape)> {
        self.hits(ray).into_iter().next()
    }
}

impl Intersectable for Geometries {
    /// Merges the hits of every shape, nearest first.
    fn find_intersections(&self, ray: &Ray) -> Option<Vec<Point>> {
        let points: Vec<Point> = self.hits(ray).into_iter().map(|(point, _)| point).collect();
        if points.is_empty() {
            return None;
        }
        Some(points)
    }
}

impl<'a> IntoIterator for &'a Geometries {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl FromIterator<Shape> for Geometries {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::with_shapes(iter)
    }
}
