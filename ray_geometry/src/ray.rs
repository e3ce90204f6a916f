use std::fmt;

use crate::{Point, Vector};

/// A half-line starting at `origin`. The direction is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// The direction is normalized here, once.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// The point at distance `t` along the ray.
    pub fn position(&self, t: f64) -> Point {
        Point::from(self.origin.triple() + self.direction.triple() * t)
    }

    /// Picks the point nearest to the ray origin, if any.
    pub fn closest_point(&self, points: &[Point]) -> Option<Point> {
        points.iter().copied().min_by(|a, b| {
            self.origin
                .distance_squared(a)
                .total_cmp(&self.origin.distance_squared(b))
        })
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray [origin={}, direction={}]", self.origin, self.direction)
    }
}
