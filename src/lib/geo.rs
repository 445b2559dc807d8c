use super::coordinates::{LineCoordinates, Position};
use super::error::GeoError;
use super::geometry::{Envelope, LineString, MultiPolygon, Point, Polygon};
use super::shape::Shape;
use super::types::GeometryType;
use geo::prelude::*;
// `geo` no longer exports this constant; same value as the former `geo::COORD_PRECISION`.
const COORD_PRECISION: f32 = 1e-1;
use geo_types::Coordinate;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl PartialEq<Location> for Location {
    fn eq(&self, other: &Self) -> bool {
        let self_point = geo_types::Point::new(self.lon, self.lat);
        let other_point = geo_types::Point::new(other.lon, other.lat);
        let distance = self_point.haversine_distance(&other_point);
        distance < COORD_PRECISION.into()
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

impl From<geo_types::Point<f64>> for Location {
    fn from(point: geo_types::Point<f64>) -> Self {
        Location {
            lat: point.lat(),
            lon: point.lng(),
        }
    }
}

impl From<Coordinate<f64>> for Location {
    fn from(coordinate: Coordinate<f64>) -> Self {
        Location {
            lat: coordinate.y,
            lon: coordinate.x,
        }
    }
}

/// The first two numbers of a position, altitude is dropped.
fn coordinate(position: &[f64]) -> Result<Coordinate<f64>, GeoError> {
    match position {
        [x, y, ..] => Ok(Coordinate { x: *x, y: *y }),
        _ => Err(GeoError::InvalidPosition(position.len())),
    }
}

fn line_string(positions: &[Position]) -> Result<geo_types::LineString<f64>, GeoError> {
    let coordinates = positions
        .iter()
        .map(|position| coordinate(position))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(coordinates.into())
}

fn polygon(rings: &[LineCoordinates]) -> Result<geo_types::Polygon<f64>, GeoError> {
    let mut rings = rings
        .iter()
        .map(|ring| line_string(ring))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    let exterior = rings
        .next()
        .unwrap_or_else(|| geo_types::LineString(vec![]));
    Ok(geo_types::Polygon::new(exterior, rings.collect()))
}

// counter-clockwise, starting at the upper-left corner
fn envelope_polygon(envelope: &Envelope) -> Result<geo_types::Polygon<f64>, GeoError> {
    let ul = coordinate(envelope.upper_left())?;
    let lr = coordinate(envelope.lower_right())?;
    let ring: geo_types::LineString<f64> = vec![
        (ul.x, ul.y),
        (ul.x, lr.y),
        (lr.x, lr.y),
        (lr.x, ul.y),
        (ul.x, ul.y),
    ]
    .into();
    Ok(geo_types::Polygon::new(ring, vec![]))
}

/// Convert into the `geo-types` model. Circles have no counterpart and
/// envelopes become rectangular polygons.
impl TryFrom<&Shape> for geo_types::Geometry<f64> {
    type Error = GeoError;

    fn try_from(shape: &Shape) -> Result<Self, Self::Error> {
        let geometry = match shape {
            Shape::Point(point) => {
                geo_types::Geometry::Point(geo_types::Point(coordinate(&point.coordinates)?))
            }
            Shape::MultiPoint(points) => {
                let points = points
                    .coordinates
                    .iter()
                    .map(|position| coordinate(position).map(geo_types::Point))
                    .collect::<Result<Vec<_>, _>>()?;
                geo_types::Geometry::MultiPoint(geo_types::MultiPoint(points))
            }
            Shape::LineString(line) => {
                geo_types::Geometry::LineString(line_string(&line.coordinates)?)
            }
            Shape::MultiLineString(lines) => {
                let lines = lines
                    .coordinates
                    .iter()
                    .map(|line| line_string(line))
                    .collect::<Result<Vec<_>, _>>()?;
                geo_types::Geometry::MultiLineString(geo_types::MultiLineString(lines))
            }
            Shape::Polygon(rings) => geo_types::Geometry::Polygon(polygon(&rings.coordinates)?),
            Shape::MultiPolygon(polygons) => {
                let polygons = polygons
                    .coordinates
                    .iter()
                    .map(|rings| polygon(rings))
                    .collect::<Result<Vec<_>, _>>()?;
                geo_types::Geometry::MultiPolygon(geo_types::MultiPolygon(polygons))
            }
            Shape::GeometryCollection(collection) => {
                let geometries = collection
                    .iter()
                    .map(|shape| <geo_types::Geometry<f64> as TryFrom<&Shape>>::try_from(shape))
                    .collect::<Result<Vec<_>, _>>()?;
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(geometries))
            }
            Shape::Envelope(envelope) => geo_types::Geometry::Polygon(envelope_polygon(envelope)?),
            Shape::Circle(_) => return Err(GeoError::Unsupported(GeometryType::Circle)),
        };
        Ok(geometry)
    }
}

fn position(coordinate: Coordinate<f64>) -> Position {
    vec![coordinate.x, coordinate.y]
}

fn positions(line: &geo_types::LineString<f64>) -> LineCoordinates {
    line.0.iter().map(|coordinate| position(*coordinate)).collect()
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        Point::new(position(point.0))
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(line: geo_types::LineString<f64>) -> Self {
        LineString::new(positions(&line))
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(polygon: geo_types::Polygon<f64>) -> Self {
        let exterior = positions(polygon.exterior());
        let rings = std::iter::once(exterior)
            .chain(polygon.interiors().iter().map(positions))
            .collect();
        Polygon::new(rings)
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(polygons: geo_types::MultiPolygon<f64>) -> Self {
        let coordinates = polygons
            .0
            .into_iter()
            .map(|polygon| Polygon::from(polygon).coordinates)
            .collect();
        MultiPolygon::new(coordinates)
    }
}

impl From<geo_types::Rect<f64>> for Envelope {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        Envelope::new(
            vec![rect.min().x, rect.max().y],
            vec![rect.max().x, rect.min().y],
        )
    }
}

fn push_positions<'a>(
    positions: impl IntoIterator<Item = &'a Position>,
    coordinates: &mut Vec<(f64, f64)>,
) {
    for position in positions {
        if let [x, y, ..] = position.as_slice() {
            coordinates.push((*x, *y));
        }
    }
}

fn collect_coordinates(shape: &Shape, coordinates: &mut Vec<(f64, f64)>) {
    match shape {
        Shape::Point(point) => push_positions(Some(&point.coordinates), coordinates),
        Shape::MultiPoint(points) => push_positions(&points.coordinates, coordinates),
        Shape::LineString(line) => push_positions(&line.coordinates, coordinates),
        Shape::MultiLineString(lines) => {
            push_positions(lines.coordinates.iter().flatten(), coordinates)
        }
        Shape::Polygon(rings) => push_positions(rings.coordinates.iter().flatten(), coordinates),
        Shape::MultiPolygon(polygons) => push_positions(
            polygons.coordinates.iter().flatten().flatten(),
            coordinates,
        ),
        Shape::Envelope(envelope) => push_positions(&envelope.coordinates, coordinates),
        Shape::GeometryCollection(collection) => {
            for shape in collection.iter() {
                collect_coordinates(shape, coordinates);
            }
        }
        // the radius unit is never interpreted, so a circle has no extent
        Shape::Circle(_) => (),
    }
}

impl Shape {
    /// The smallest envelope containing every position of the shape.
    ///
    /// Circles contribute nothing, `None` is returned when there is no
    /// position at all.
    pub fn bounding_envelope(&self) -> Option<Envelope> {
        let mut coordinates = vec![];
        collect_coordinates(self, &mut coordinates);
        let multi_points: geo_types::MultiPoint<f64> = coordinates.into();
        let rect = multi_points.bounding_rect()?;
        Some(rect.into())
    }
}

pub trait Centerable {
    fn get_centroid(&self) -> Option<Location>;
}

impl Centerable for Shape {
    fn get_centroid(&self) -> Option<Location> {
        match self {
            Shape::Circle(circle) => {
                let center = coordinate(&circle.coordinates).ok()?;
                Some(center.into())
            }
            Shape::Envelope(envelope) => {
                let ul = coordinate(envelope.upper_left()).ok()?;
                let lr = coordinate(envelope.lower_right()).ok()?;
                Some(Location {
                    lat: (ul.y + lr.y) / 2.,
                    lon: (ul.x + lr.x) / 2.,
                })
            }
            Shape::GeometryCollection(_) => {
                let mut coordinates = vec![];
                collect_coordinates(self, &mut coordinates);
                let multi_points: geo_types::MultiPoint<f64> = coordinates.into();
                let point = multi_points.centroid()?;
                Some(point.into())
            }
            _ => {
                let geometry = geo_types::Geometry::<f64>::try_from(self).ok()?;
                let point = match geometry {
                    geo_types::Geometry::Point(point) => Some(point),
                    geo_types::Geometry::MultiPoint(points) => points.centroid(),
                    geo_types::Geometry::LineString(line) => line.centroid(),
                    geo_types::Geometry::MultiLineString(lines) => lines.centroid(),
                    geo_types::Geometry::Polygon(polygon) => polygon.centroid(),
                    geo_types::Geometry::MultiPolygon(polygons) => polygons.centroid(),
                    _ => None,
                }?;
                Some(point.into())
            }
        }
    }
}
