use serde_yaml::{Mapping, Sequence, Value};
use thiserror::Error;
use tracing::{debug, info};

use ray_geometry::prelude::*;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("YAML deserialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid YAML object: {0}")]
    InvalidYamlObject(String),

    #[error("Encountered unknown item: {0}")]
    UnknownItem(String),

    #[error("Missing '{field}' in {item} definition")]
    MissingField { item: String, field: &'static str },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

type Result<T> = std::result::Result<T, ParseError>;

/// The shapes to intersect, and the rays to fire at them.
#[derive(Debug, Default)]
pub struct Scene {
    pub geometries: Geometries,
    pub probes: Vec<Ray>,
}

trait GetF64 {
    fn get_f64(&self) -> Result<f64>;
}

trait GetTriple {
    fn get_triple(&self) -> Result<Triple>;
}

impl GetF64 for Value {
    fn get_f64(&self) -> Result<f64> {
        self.as_f64()
            .ok_or(ParseError::InvalidValue(format!("{self:#?}")))
    }
}

impl GetTriple for Value {
    fn get_triple(&self) -> Result<Triple> {
        let values = self
            .as_sequence()
            .ok_or(ParseError::InvalidValue(format!("{self:#?}")))?
            .iter()
            .map(|f| f.get_f64())
            .collect::<Result<Vec<f64>>>()?;

        match values[..] {
            [x, y, z] => Ok(Triple::new(x, y, z)),
            _ => Err(ParseError::InvalidValue(format!(
                "Expected 3 coordinates, found {}",
                values.len()
            ))),
        }
    }
}

fn get_field<'a>(description: &'a Mapping, item: &str, field: &'static str) -> Result<&'a Value> {
    description.get(field).ok_or(ParseError::MissingField {
        item: item.to_string(),
        field,
    })
}

fn parse_point(description: &Mapping, item: &str, field: &'static str) -> Result<Point> {
    let triple = get_field(description, item, field)?.get_triple()?;
    Ok(Point::from(triple))
}

fn parse_vector(description: &Mapping, item: &str, field: &'static str) -> Result<Vector> {
    let triple = get_field(description, item, field)?.get_triple()?;
    Ok(Vector::try_from(triple)?)
}

fn parse_ray(description: &Mapping, item: &str) -> Result<Ray> {
    let origin = parse_point(description, item, "origin")?;
    let direction = parse_vector(description, item, "direction")?;
    Ok(Ray::new(origin, direction))
}

fn parse_axis(description: &Mapping, item: &str) -> Result<Ray> {
    // the axis is described as a nested mapping with an 'origin' and a 'direction'
    let axis = get_field(description, item, "axis")?
        .as_mapping()
        .ok_or(ParseError::InvalidValue(format!(
            "The axis of a {item} must be a mapping"
        )))?;
    parse_ray(axis, item)
}

fn construct_plane(description: &Mapping) -> Result<Plane> {
    // a plane is either given by three points on it
    // or by a point on it and its normal
    if let Some(points) = description.get("points") {
        let points = points
            .as_sequence()
            .ok_or(ParseError::InvalidValue(format!("{points:#?}")))?
            .iter()
            .map(|p| p.get_triple().map(Point::from))
            .collect::<Result<Vec<Point>>>()?;

        return match points[..] {
            [p1, p2, p3] => Ok(Plane::from_points(p1, p2, p3)?),
            _ => Err(ParseError::InvalidValue(format!(
                "A plane needs exactly 3 points, found {}",
                points.len()
            ))),
        };
    }

    let point = parse_point(description, "plane", "point")?;
    let normal = parse_vector(description, "plane", "normal")?;
    Ok(Plane::new(point, normal))
}

fn construct_shape(description: &Mapping, shape_type: &str) -> Result<Shape> {
    let shape: Shape = match shape_type {
        "plane" => construct_plane(description)?.into(),
        "sphere" => {
            let center = parse_point(description, shape_type, "center")?;
            let radius = get_field(description, shape_type, "radius")?.get_f64()?;
            Sphere::new(center, radius)?.into()
        }
        "tube" => {
            let axis = parse_axis(description, shape_type)?;
            let radius = get_field(description, shape_type, "radius")?.get_f64()?;
            Tube::new(axis, radius)?.into()
        }
        "cylinder" => {
            let axis = parse_axis(description, shape_type)?;
            let radius = get_field(description, shape_type, "radius")?.get_f64()?;
            let height = get_field(description, shape_type, "height")?.get_f64()?;
            Cylinder::new(axis, radius, height)?.into()
        }
        _ => return Err(ParseError::UnknownItem(shape_type.to_owned())),
    };

    debug!(shape = %shape.shape_type(), "constructed shape");
    Ok(shape)
}

pub fn parse_scene(input: &str) -> Result<Scene> {
    let sequence = serde_yaml::from_str::<Sequence>(input)?;

    let mut scene = Scene::default();

    for item in sequence {
        let mapping = item.as_mapping().ok_or(ParseError::InvalidYamlObject(format!(
            "Expected mapping, found {item:#?}"
        )))?;

        let item_type = mapping
            .get("add")
            .and_then(|x| x.as_str())
            .ok_or(ParseError::InvalidYamlObject(
                "Every item must have a string 'add' key".to_string(),
            ))?;

        match item_type {
            "probe" => scene.probes.push(parse_ray(mapping, item_type)?),
            "plane" | "sphere" | "tube" | "cylinder" => {
                let shape = construct_shape(mapping, item_type)?;
                scene.geometries.add(shape);
            }
            _ => return Err(ParseError::UnknownItem(item_type.to_owned())),
        }
    }

    info!(
        shapes = scene.geometries.len(),
        probes = scene.probes.len(),
        "parsed scene"
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_scene() {
        let input = r#"
        - add: sphere
          center: [0, 0, 0]
          radius: 1
        - add: plane
          point: [0, 0, -2]
          normal: [0, 0, 3]
        - add: probe
          origin: [0, 0, 10]
          direction: [0, 0, -1]
        "#;

        let scene = parse_scene(input).unwrap();
        assert_eq!(scene.geometries.len(), 2);
        assert_eq!(scene.probes.len(), 1);

        let shapes: Vec<&Shape> = scene.geometries.iter().collect();
        assert_eq!(
            *shapes[0],
            Shape::from(Sphere::new(Point::ZERO, 1.).unwrap())
        );
        assert_eq!(
            *shapes[1],
            Shape::from(Plane::new(Point::new(0., 0., -2.), Vector::Z))
        );
        assert_eq!(
            scene.probes[0],
            Ray::new(Point::new(0., 0., 10.), -Vector::Z)
        );
    }

    #[test]
    fn parse_plane_from_points() {
        let input = r#"
        - add: plane
          points:
            - [0, 0, 1]
            - [1, 0, 1]
            - [0, 1, 1]
        "#;

        let scene = parse_scene(input).unwrap();
        let plane = scene.geometries.iter().next().unwrap();
        assert_eq!(plane.shape_type(), ShapeType::Plane);
        assert_eq!(plane.normal_at(&Point::new(0., 0., 1.)).unwrap(), Vector::Z);
    }

    #[test]
    fn parse_tube_and_cylinder() {
        let input = r#"
        - add: tube
          axis:
            origin: [0, 0, 0]
            direction: [0, 0, 1]
          radius: 1
        - add: cylinder
          axis: { origin: [0, 0, 0], direction: [0, 0, 2] }
          radius: 1
          height: 5
        "#;

        let scene = parse_scene(input).unwrap();
        let shapes: Vec<&Shape> = scene.geometries.iter().collect();
        let axis = Ray::new(Point::ZERO, Vector::Z);
        assert_eq!(*shapes[0], Shape::from(Tube::new(axis, 1.).unwrap()));
        assert_eq!(
            *shapes[1],
            Shape::from(Cylinder::new(axis, 1., 5.).unwrap())
        );
    }

    #[test]
    fn missing_field_is_reported() {
        let input = r#"
        - add: cylinder
          radius: 1
          height: 5
        "#;

        let err = parse_scene(input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { field: "axis", .. }
        ));
        assert_eq!(err.to_string(), "Missing 'axis' in cylinder definition");
    }

    #[test]
    fn invalid_radius_is_a_geometry_error() {
        let input = r#"
        - add: sphere
          center: [0, 0, 0]
          radius: -1
        "#;

        let err = parse_scene(input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry(GeometryError::InvalidShapeParameter(_))
        ));
    }

    #[test]
    fn zero_direction_is_rejected() {
        let input = r#"
        - add: probe
          origin: [0, 0, 0]
          direction: [0, 0, 0]
        "#;

        let err = parse_scene(input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry(GeometryError::DegenerateVector)
        ));
    }

    #[test]
    fn collinear_plane_points_are_rejected() {
        let input = r#"
        - add: plane
          points: [[1, 2, 3], [2, 4, 6], [3, 6, 9]]
        "#;

        let err = parse_scene(input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Geometry(GeometryError::InvalidPlaneDefinition)
        ));
    }

    #[test]
    fn coordinates_must_be_triples() {
        let input = r#"
        - add: sphere
          center: [0, 0]
          radius: 1
        "#;

        assert!(matches!(
            parse_scene(input),
            Err(ParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_item_is_rejected() {
        let input = r#"
        - add: cone
          radius: 1
        "#;

        assert!(matches!(
            parse_scene(input),
            Err(ParseError::UnknownItem(item)) if item == "cone"
        ));
    }

    #[test]
    fn items_must_be_mappings() {
        let input = r#"
        - [1, 2, 3]
        "#;

        assert!(matches!(
            parse_scene(input),
            Err(ParseError::InvalidYamlObject(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            parse_scene("- add: sphere\n  center: [0, 0"),
            Err(ParseError::Yaml(_))
        ));
    }
}
