use std::fmt;
use std::ops::Neg;

use crate::{error::GeometryError, Result, Triple};

/// A direction with magnitude. Never the zero vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Triple);

impl Vector {
    pub const X: Self = Self(Triple::new(1., 0., 0.));
    pub const Y: Self = Self(Triple::new(0., 1., 0.));
    pub const Z: Self = Self(Triple::new(0., 0., 1.));

    /// Fails with `GeometryError::DegenerateVector` for (0, 0, 0).
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::try_from(Triple::new(x, y, z))
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

    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::try_from(self.0 + other.0)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Self::try_from(self.0 - other.0)
    }

    pub fn scale(&self, scalar: f64) -> Result<Self> {
        Self::try_from(self.0 * scalar)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Fails for parallel vectors.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let (a, b) = (self.0, other.0);
        Self::try_from(Triple::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        ))
    }

    pub fn length_squared(&self) -> f64 {
        self.0.dot(&self.0)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Self {
        // rescale first so the squared length can neither overflow nor underflow
        let scaled = self.0 / self.0.max_abs();
        let length = scaled.dot(&scaled).sqrt();
        Self(scaled / length)
    }
}

impl TryFrom<Triple> for Vector {
    type Error = GeometryError;

    /// The single gate every vector-producing operation passes through.
    fn try_from(triple: Triple) -> Result<Self> {
        if triple.is_zero() {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(Self(triple))
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
