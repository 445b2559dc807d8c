use super::collection::{decode_collection, GeometryCollection};
use super::error::GeoError;
use super::geometry::{
    Circle, Envelope, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use super::raw::{DecodeOptions, RawEnvelope};
use super::types::GeometryType;
use serde::ser::{Serialize, Serializer};

/// A geometry whose type is only known once it has been decoded, e.g. the
/// value of a `geo_shape` field.
///
/// ```
/// use es_geo::Shape;
///
/// let json = br#"{"type":"circle","radius":"25m","coordinates":[-109.874838,44.43955]}"#;
/// let shape = Shape::from_json(json).unwrap();
/// assert!(shape.is_circle());
/// assert_eq!(shape.as_circle().unwrap().radius, "25m");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Envelope(Envelope),
    Circle(Circle),
}

/// Dispatch on the envelope's tag. `depth` is the nesting of the enclosing
/// collection, 0 at the top level.
pub(crate) fn decode_shape(
    envelope: RawEnvelope,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Shape, GeoError> {
    let shape = match envelope.geometry_type()? {
        GeometryType::Point => Shape::Point(Point::from_envelope(envelope)?),
        GeometryType::MultiPoint => Shape::MultiPoint(MultiPoint::from_envelope(envelope)?),
        GeometryType::LineString => Shape::LineString(LineString::from_envelope(envelope)?),
        GeometryType::MultiLineString => {
            Shape::MultiLineString(MultiLineString::from_envelope(envelope)?)
        }
        GeometryType::Polygon => Shape::Polygon(Polygon::from_envelope(envelope)?),
        GeometryType::MultiPolygon => Shape::MultiPolygon(MultiPolygon::from_envelope(envelope)?),
        GeometryType::GeometryCollection => {
            Shape::GeometryCollection(decode_collection(envelope, options, depth + 1)?)
        }
        GeometryType::Envelope => Shape::Envelope(Envelope::from_envelope(envelope)?),
        GeometryType::Circle => Shape::Circle(Circle::from_envelope(envelope)?),
    };
    Ok(shape)
}

impl Shape {
    pub fn from_envelope(envelope: RawEnvelope) -> Result<Self, GeoError> {
        Self::from_envelope_with(envelope, &DecodeOptions::default())
    }

    pub fn from_envelope_with(
        envelope: RawEnvelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoError> {
        decode_shape(envelope, options, 0)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, GeoError> {
        Self::from_json_with(bytes, &DecodeOptions::default())
    }

    pub fn from_json_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, GeoError> {
        Self::from_envelope_with(RawEnvelope::parse(bytes)?, options)
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Shape::Point(_) => GeometryType::Point,
            Shape::MultiPoint(_) => GeometryType::MultiPoint,
            Shape::LineString(_) => GeometryType::LineString,
            Shape::MultiLineString(_) => GeometryType::MultiLineString,
            Shape::Polygon(_) => GeometryType::Polygon,
            Shape::MultiPolygon(_) => GeometryType::MultiPolygon,
            Shape::GeometryCollection(_) => GeometryType::GeometryCollection,
            Shape::Envelope(_) => GeometryType::Envelope,
            Shape::Circle(_) => GeometryType::Circle,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Shape::Point(_))
    }

    pub fn is_multi_point(&self) -> bool {
        matches!(self, Shape::MultiPoint(_))
    }

    pub fn is_line_string(&self) -> bool {
        matches!(self, Shape::LineString(_))
    }

    pub fn is_multi_line_string(&self) -> bool {
        matches!(self, Shape::MultiLineString(_))
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }

    pub fn is_multi_polygon(&self) -> bool {
        matches!(self, Shape::MultiPolygon(_))
    }

    pub fn is_geometry_collection(&self) -> bool {
        matches!(self, Shape::GeometryCollection(_))
    }

    pub fn is_envelope(&self) -> bool {
        matches!(self, Shape::Envelope(_))
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Shape::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_multi_point(&self) -> Option<&MultiPoint> {
        match self {
            Shape::MultiPoint(points) => Some(points),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Shape::LineString(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_multi_line_string(&self) -> Option<&MultiLineString> {
        match self {
            Shape::MultiLineString(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Shape::MultiPolygon(polygons) => Some(polygons),
            _ => None,
        }
    }

    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection> {
        match self {
            Shape::GeometryCollection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_envelope(&self) -> Option<&Envelope> {
        match self {
            Shape::Envelope(envelope) => Some(envelope),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Shape::Point(point) => point.serialize(serializer),
            Shape::MultiPoint(points) => points.serialize(serializer),
            Shape::LineString(line) => line.serialize(serializer),
            Shape::MultiLineString(lines) => lines.serialize(serializer),
            Shape::Polygon(polygon) => polygon.serialize(serializer),
            Shape::MultiPolygon(polygons) => polygons.serialize(serializer),
            Shape::GeometryCollection(collection) => collection.serialize(serializer),
            Shape::Envelope(envelope) => envelope.serialize(serializer),
            Shape::Circle(circle) => circle.serialize(serializer),
        }
    }
}

deserialize_from_envelope!(Shape, Shape::from_envelope);

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}

impl From<MultiPoint> for Shape {
    fn from(points: MultiPoint) -> Self {
        Shape::MultiPoint(points)
    }
}

impl From<LineString> for Shape {
    fn from(line: LineString) -> Self {
        Shape::LineString(line)
    }
}

impl From<MultiLineString> for Shape {
    fn from(lines: MultiLineString) -> Self {
        Shape::MultiLineString(lines)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Shape {
    fn from(polygons: MultiPolygon) -> Self {
        Shape::MultiPolygon(polygons)
    }
}

impl From<GeometryCollection> for Shape {
    fn from(collection: GeometryCollection) -> Self {
        Shape::GeometryCollection(collection)
    }
}

impl From<Envelope> for Shape {
    fn from(envelope: Envelope) -> Self {
        Shape::Envelope(envelope)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
