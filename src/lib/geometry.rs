use super::coordinates::{LineCoordinates, MultiPolygonCoordinates, PolygonCoordinates, Position};
use super::error::GeoError;
use super::raw::RawEnvelope;
use super::types::GeometryType;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A concrete geometry variant with a fixed `type` tag.
pub trait Geometry: Sized {
    const TYPE: GeometryType;

    /// Reinterpret a parsed envelope as this variant.
    fn from_envelope(envelope: RawEnvelope) -> Result<Self, GeoError>;

    fn from_json(bytes: &[u8]) -> Result<Self, GeoError> {
        Self::from_envelope(RawEnvelope::parse(bytes)?)
    }

    fn geometry_type(&self) -> GeometryType {
        Self::TYPE
    }
}

/// Variants which consist of a `type` tag and `coordinates` only.
macro_rules! coordinate_geometry {
    ($(#[$meta:meta])* $name:ident, $coordinates:ty, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub coordinates: $coordinates,
        }

        impl $name {
            pub fn new(coordinates: $coordinates) -> Self {
                $name { coordinates }
            }
        }

        impl Geometry for $name {
            const TYPE: GeometryType = $kind;

            fn from_envelope(mut envelope: RawEnvelope) -> Result<Self, GeoError> {
                envelope.expect_type(Self::TYPE)?;
                let coordinates = envelope.coordinates_as(Self::TYPE)?;
                Ok($name { coordinates })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut state = serializer.serialize_struct(stringify!($name), 2)?;
                state.serialize_field("type", &Self::TYPE)?;
                state.serialize_field("coordinates", &self.coordinates)?;
                state.end()
            }
        }

        deserialize_from_envelope!($name, <$name as Geometry>::from_envelope);
    };
}

coordinate_geometry!(Point, Position, GeometryType::Point);

coordinate_geometry!(MultiPoint, LineCoordinates, GeometryType::MultiPoint);

coordinate_geometry!(
    /// Two or more positions. The count is not checked when decoding.
    LineString,
    LineCoordinates,
    GeometryType::LineString
);

coordinate_geometry!(
    MultiLineString,
    PolygonCoordinates,
    GeometryType::MultiLineString
);

coordinate_geometry!(
    /// Linear rings, the first one is the exterior, the others are holes.
    Polygon,
    PolygonCoordinates,
    GeometryType::Polygon
);

coordinate_geometry!(
    MultiPolygon,
    MultiPolygonCoordinates,
    GeometryType::MultiPolygon
);

/// A bounding box given by its upper-left and lower-right corners.
///
/// Both corners are kept in the order received, nothing is normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub coordinates: [Position; 2],
}

impl Envelope {
    pub fn new(upper_left: Position, lower_right: Position) -> Self {
        Envelope {
            coordinates: [upper_left, lower_right],
        }
    }

    pub fn upper_left(&self) -> &Position {
        &self.coordinates[0]
    }

    pub fn lower_right(&self) -> &Position {
        &self.coordinates[1]
    }
}

impl Geometry for Envelope {
    const TYPE: GeometryType = GeometryType::Envelope;

    fn from_envelope(mut envelope: RawEnvelope) -> Result<Self, GeoError> {
        envelope.expect_type(Self::TYPE)?;
        let coordinates = envelope.coordinates_as(Self::TYPE)?;
        Ok(Envelope { coordinates })
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        state.serialize_field("type", &Self::TYPE)?;
        state.serialize_field("coordinates", &self.coordinates)?;
        state.end()
    }
}

deserialize_from_envelope!(Envelope, <Envelope as Geometry>::from_envelope);

/// A center position with a radius such as `"25m"`. The radius is passed
/// through as is, its unit is never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub coordinates: Position,
    pub radius: String,
}

impl Circle {
    pub fn new(coordinates: Position, radius: impl Into<String>) -> Self {
        Circle {
            coordinates,
            radius: radius.into(),
        }
    }
}

impl Geometry for Circle {
    const TYPE: GeometryType = GeometryType::Circle;

    fn from_envelope(mut envelope: RawEnvelope) -> Result<Self, GeoError> {
        envelope.expect_type(Self::TYPE)?;
        let coordinates = envelope.coordinates_as(Self::TYPE)?;
        let radius = envelope.radius(Self::TYPE)?;
        Ok(Circle {
            coordinates,
            radius,
        })
    }
}

impl Serialize for Circle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Circle", 3)?;
        state.serialize_field("type", &Self::TYPE)?;
        state.serialize_field("coordinates", &self.coordinates)?;
        state.serialize_field("radius", &self.radius)?;
        state.end()
    }
}

deserialize_from_envelope!(Circle, <Circle as Geometry>::from_envelope);
