use super::error::GeoError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The canonical `type` tag of a geometry on the wire.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Envelope,
    Circle,
}

impl GeometryType {
    /// All tags, in the order shapes are dispatched when encoding. This is also
    /// the order of `Ord`.
    pub const ALL: [GeometryType; 9] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
        GeometryType::Envelope,
        GeometryType::Circle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::MultiPoint => "multipoint",
            GeometryType::LineString => "linestring",
            GeometryType::MultiLineString => "multilinestring",
            GeometryType::Polygon => "polygon",
            GeometryType::MultiPolygon => "multipolygon",
            GeometryType::GeometryCollection => "geometrycollection",
            GeometryType::Envelope => "envelope",
            GeometryType::Circle => "circle",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags are matched case-sensitively, `"Point"` is not a known tag.
impl FromStr for GeometryType {
    type Err = GeoError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        GeometryType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| GeoError::UnknownGeometryType(tag.to_string()))
    }
}
