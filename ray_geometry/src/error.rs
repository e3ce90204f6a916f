use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("Operation would produce the zero vector")]
    DegenerateVector,

    #[error("Invalid shape parameter: {0}")]
    InvalidShapeParameter(String),

    #[error("Plane points must be distinct and not collinear")]
    InvalidPlaneDefinition,
}
