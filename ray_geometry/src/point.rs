use std::fmt;

use crate::{Result, Triple, Vector};

/// A position in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Triple);

impl Point {
    pub const ZERO: Self = Self(Triple::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Triple::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x()
    }

    pub fn y(&self) -> f64 {
        self.0.y()
    }

    pub fn z(&self) -> f64 {
        self.0.z()
    }

    pub fn triple(&self) -> Triple {
        self.0
    }

    /// Translates the point by the vector.
    pub fn add(&self, vector: &Vector) -> Self {
        Self(self.0 + vector.triple())
    }

    /// Returns the vector pointing from `other` to `self`.
    /// Fails with `GeometryError::DegenerateVector` when both points are equal.
    pub fn subtract(&self, other: &Self) -> Result<Vector> {
        Vector::try_from(self.0 - other.0)
    }

    pub fn distance_squared(&self, other: &Self) -> f64 {
        let d = self.0 - other.0;
        d.dot(&d)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl From<Triple> for Point {
    fn from(triple: Triple) -> Self {
        Self(triple)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
