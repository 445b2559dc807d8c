//! Coordinate aliases, one per nesting depth used on the wire.

/// A single position: longitude, latitude and an optional altitude.
pub type Position = Vec<f64>;

/// A sequence of positions (multipoint, linestring, a single ring).
pub type LineCoordinates = Vec<Position>;

/// A sequence of rings or lines. For polygons the first ring is the exterior,
/// the rest are holes.
pub type PolygonCoordinates = Vec<LineCoordinates>;

/// A sequence of polygons.
pub type MultiPolygonCoordinates = Vec<PolygonCoordinates>;
