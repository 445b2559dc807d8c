use super::collection::GeometryCollection;
use super::coordinates::{LineCoordinates, MultiPolygonCoordinates, PolygonCoordinates, Position};
use super::error::GeoError;
use super::geometry::{
    Circle, Envelope, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use super::shape::Shape;

/// Selects the geometry of a shape built by [`new_shape`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOption(Shape);

impl From<Shape> for ShapeOption {
    fn from(shape: Shape) -> Self {
        ShapeOption(shape)
    }
}

pub fn with_point(coordinates: Position) -> ShapeOption {
    ShapeOption(Point::new(coordinates).into())
}

pub fn with_multi_point(coordinates: LineCoordinates) -> ShapeOption {
    ShapeOption(MultiPoint::new(coordinates).into())
}

pub fn with_line_string(coordinates: LineCoordinates) -> ShapeOption {
    ShapeOption(LineString::new(coordinates).into())
}

pub fn with_multi_line_string(coordinates: PolygonCoordinates) -> ShapeOption {
    ShapeOption(MultiLineString::new(coordinates).into())
}

pub fn with_polygon(coordinates: PolygonCoordinates) -> ShapeOption {
    ShapeOption(Polygon::new(coordinates).into())
}

pub fn with_multi_polygon(coordinates: MultiPolygonCoordinates) -> ShapeOption {
    ShapeOption(MultiPolygon::new(coordinates).into())
}

pub fn with_geometry_collection(geometries: Vec<Shape>) -> ShapeOption {
    ShapeOption(GeometryCollection::new(geometries).into())
}

pub fn with_envelope(upper_left: Position, lower_right: Position) -> ShapeOption {
    ShapeOption(Envelope::new(upper_left, lower_right).into())
}

pub fn with_circle(coordinates: Position, radius: impl Into<String>) -> ShapeOption {
    ShapeOption(Circle::new(coordinates, radius).into())
}

/// Build a shape from `options`, applied in order.
///
/// Each option replaces the whole geometry, so the last one wins and no
/// earlier geometry survives. Without any option there is nothing to encode
/// and [`GeoError::EmptyShape`] is returned.
///
/// ```
/// use es_geo::{new_shape, with_point, with_polygon};
///
/// let ring = vec![vec![0., 0.], vec![1., 0.], vec![1., 1.], vec![0., 0.]];
/// let shape = new_shape(vec![with_point(vec![5., 5.]), with_polygon(vec![ring])]).unwrap();
/// assert!(shape.is_polygon());
/// assert!(!shape.is_point());
/// ```
pub fn new_shape(options: impl IntoIterator<Item = ShapeOption>) -> Result<Shape, GeoError> {
    options
        .into_iter()
        .last()
        .map(|ShapeOption(shape)| shape)
        .ok_or(GeoError::EmptyShape)
}
