use tracing::debug;

use crate::{error::GeometryError, Result};

/// Radius shared by the round shapes, with its square kept alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    radius: f64,
    radius_squared: f64,
}

impl RadialGeometry {
    pub fn new(radius: f64) -> Result<Self> {
        // written this way round so that NaN is rejected too
        if !(radius > 0.) {
            debug!(radius, "rejecting non-positive radius");
            return Err(GeometryError::InvalidShapeParameter(format!(
                "radius must be positive, got {radius}"
            )));
        }

        Ok(Self {
            radius,
            radius_squared: radius * radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }
}
