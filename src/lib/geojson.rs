//! RFC 7946 GeoJSON rendition of shapes, for tools which do not understand
//! the search engine's own tags.
use super::coordinates::{LineCoordinates, MultiPolygonCoordinates, PolygonCoordinates, Position};
use super::error::GeoError;
use super::geometry::Envelope;
use super::shape::Shape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: LineCoordinates,
    },
    LineString {
        coordinates: LineCoordinates,
    },
    MultiLineString {
        coordinates: PolygonCoordinates,
    },
    Polygon {
        coordinates: PolygonCoordinates,
    },
    MultiPolygon {
        coordinates: MultiPolygonCoordinates,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        properties: HashMap<String, String>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

fn corner(position: &[f64]) -> Result<(f64, f64), GeoError> {
    match position {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(GeoError::InvalidPosition(position.len())),
    }
}

fn envelope_ring(envelope: &Envelope) -> Result<LineCoordinates, GeoError> {
    let (left, top) = corner(envelope.upper_left())?;
    let (right, bottom) = corner(envelope.lower_right())?;
    Ok(vec![
        vec![left, top],
        vec![left, bottom],
        vec![right, bottom],
        vec![right, top],
        vec![left, top],
    ])
}

/// Envelopes become closed counter-clockwise polygons and circles lose their
/// radius, convert into an [`Entity`] to keep it. An envelope corner without
/// two numbers has no valid ring and fails.
impl TryFrom<&Shape> for Geometry {
    type Error = GeoError;

    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        let geometry = match shape {
            Shape::Point(point) => Geometry::Point {
                coordinates: point.coordinates.clone(),
            },
            Shape::MultiPoint(points) => Geometry::MultiPoint {
                coordinates: points.coordinates.clone(),
            },
            Shape::LineString(line) => Geometry::LineString {
                coordinates: line.coordinates.clone(),
            },
            Shape::MultiLineString(lines) => Geometry::MultiLineString {
                coordinates: lines.coordinates.clone(),
            },
            Shape::Polygon(polygon) => Geometry::Polygon {
                coordinates: polygon.coordinates.clone(),
            },
            Shape::MultiPolygon(polygons) => Geometry::MultiPolygon {
                coordinates: polygons.coordinates.clone(),
            },
            Shape::GeometryCollection(collection) => Geometry::GeometryCollection {
                geometries: collection
                    .iter()
                    .map(Geometry::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            Shape::Envelope(envelope) => Geometry::Polygon {
                coordinates: vec![envelope_ring(envelope)?],
            },
            Shape::Circle(circle) => Geometry::Point {
                coordinates: circle.coordinates.clone(),
            },
        };
        Ok(geometry)
    }
}

/// A feature carrying the original tag as `shape_type`, and for circles the
/// `radius`.
impl TryFrom<&Shape> for Entity {
    type Error = GeoError;

    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        let mut properties = HashMap::new();
        properties.insert(
            "shape_type".to_string(),
            shape.geometry_type().to_string(),
        );
        if let Shape::Circle(circle) = shape {
            properties.insert("radius".to_string(), circle.radius.clone());
        }
        Ok(Entity::Feature {
            properties,
            geometry: Geometry::try_from(shape)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Point};
    use serde_json::{json, to_value};

    #[test]
    fn capitalized_tags() {
        let shape: Shape = Point::new(vec![1., 2.]).into();
        let value = to_value(Geometry::try_from(&shape).unwrap()).unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [1.0, 2.0]}));
    }

    #[test]
    fn envelope_as_polygon() {
        let shape: Shape = Envelope::new(vec![100., 1.], vec![101., 0.]).into();
        let geometry = Geometry::try_from(&shape).unwrap();
        let expected = vec![vec![
            vec![100., 1.],
            vec![100., 0.],
            vec![101., 0.],
            vec![101., 1.],
            vec![100., 1.],
        ]];
        assert_eq!(
            geometry,
            Geometry::Polygon {
                coordinates: expected
            }
        );
    }

    #[test]
    fn circle_feature_keeps_radius() {
        let shape: Shape = Circle::new(vec![1., 2.], "25m").into();
        let value = to_value(Entity::try_from(&shape).unwrap()).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["properties"]["radius"], "25m");
        assert_eq!(value["properties"]["shape_type"], "circle");
    }

    #[test]
    fn envelope_with_short_corner() {
        let shape: Shape = Envelope::new(vec![1.], vec![2., 3.]).into();
        let result = Geometry::try_from(&shape);
        assert!(matches!(result, Err(GeoError::InvalidPosition(1))));

        let collection: Shape =
            crate::collection::GeometryCollection::new(vec![Point::new(vec![0., 0.]).into(), shape])
                .into();
        assert!(Entity::try_from(&collection).is_err());
    }
}
