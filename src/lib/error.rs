use super::types::GeometryType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// The input is not a JSON object.
    #[error("malformed geometry json: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("unknown geometry type {0:?}")]
    UnknownGeometryType(String),

    #[error("expected geometry type {expected}, found {found}")]
    TypeMismatch {
        expected: GeometryType,
        found: GeometryType,
    },

    #[error("{kind} is missing field {field:?}")]
    MissingField {
        kind: GeometryType,
        field: &'static str,
    },

    /// The coordinates do not have the nesting depth or leaf types of `kind`.
    #[error("invalid coordinates for {kind}: {source}")]
    Coordinates {
        kind: GeometryType,
        #[source]
        source: serde_json::Error,
    },

    #[error("geometry collections nested deeper than {0} levels")]
    CollectionTooDeep(usize),

    #[error("shape has no geometry")]
    EmptyShape,

    #[error("position needs at least 2 coordinates, found {0}")]
    InvalidPosition(usize),

    #[error("{0} has no geo-types counterpart")]
    Unsupported(GeometryType),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<GeoError>,
    },
}
