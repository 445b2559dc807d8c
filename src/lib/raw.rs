use super::error::GeoError;
use super::types::GeometryType;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Implement `Deserialize` by parsing a [`RawEnvelope`] and handing it to
/// `$decode`.
macro_rules! deserialize_from_envelope {
    ($name:ty, $decode:expr) => {
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let envelope =
                    <$crate::raw::RawEnvelope as ::serde::Deserialize>::deserialize(deserializer)?;
                $decode(envelope).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// A geometry object with its coordinates left undecoded.
///
/// Every geometry shares the `type` + `coordinates` layout but the nesting
/// depth of `coordinates` depends on the type. Decoding therefore happens in
/// two steps: the envelope is parsed first, then the variant reinterprets
/// `coordinates` at its own depth.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawEnvelope {
    /// Missing and `null` tags both end up as the empty, unknown tag.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub geometries: Vec<RawEnvelope>,
    #[serde(default)]
    pub radius: Option<String>,
}

/// Parse `bytes` into a [`RawEnvelope`].
///
/// Only fails when the input is not a JSON object; the coordinates are
/// accepted whatever their shape.
///
/// ```
/// use es_geo::parse_envelope;
///
/// let raw = parse_envelope(br#"{"type":"point","coordinates":[[1,2]]}"#).unwrap();
/// assert_eq!(raw.kind(), "point");
/// ```
pub fn parse_envelope(bytes: &[u8]) -> Result<RawEnvelope, GeoError> {
    RawEnvelope::parse(bytes)
}

impl RawEnvelope {
    /// serde_json's recursion limit is lifted, the stack grows on the heap
    /// instead, so deeply nested collections are left to
    /// [`DecodeOptions::max_collection_depth`].
    pub fn parse(bytes: &[u8]) -> Result<Self, GeoError> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        deserializer.disable_recursion_limit();
        let envelope = RawEnvelope::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .map_err(GeoError::MalformedJson)?;
        deserializer.end().map_err(GeoError::MalformedJson)?;
        Ok(envelope)
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    pub fn geometry_type(&self) -> Result<GeometryType, GeoError> {
        self.kind().parse()
    }

    pub fn expect_type(&self, expected: GeometryType) -> Result<(), GeoError> {
        let found = self.geometry_type()?;
        if found != expected {
            return Err(GeoError::TypeMismatch { expected, found });
        }
        Ok(())
    }

    /// Decode the deferred coordinates at the depth given by `T`.
    pub fn coordinates_as<T: DeserializeOwned>(&mut self, kind: GeometryType) -> Result<T, GeoError> {
        let value = self.coordinates.take().ok_or(GeoError::MissingField {
            kind,
            field: "coordinates",
        })?;
        serde_json::from_value(value).map_err(|source| GeoError::Coordinates { kind, source })
    }

    pub fn radius(&mut self, kind: GeometryType) -> Result<String, GeoError> {
        self.radius.take().ok_or(GeoError::MissingField {
            kind,
            field: "radius",
        })
    }
}

/// Settings applied while decoding shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of geometry collections, `None` for no limit. A single
    /// collection has depth 1.
    pub max_collection_depth: Option<usize>,
}

impl DecodeOptions {
    pub fn with_max_collection_depth(depth: usize) -> Self {
        DecodeOptions {
            max_collection_depth: Some(depth),
        }
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), GeoError> {
        match self.max_collection_depth {
            Some(limit) if depth > limit => Err(GeoError::CollectionTooDeep(limit)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_coordinates_undecoded() {
        let raw = parse_envelope(br#"{"type":"point","coordinates":[[[1]]]}"#).unwrap();
        assert_eq!(raw.kind(), "point");
        assert_eq!(raw.coordinates, Some(serde_json::json!([[[1]]])));
        assert!(raw.geometries.is_empty());
        assert_eq!(raw.radius, None);
    }

    #[test]
    fn nested_geometries_and_radius() {
        let json = br#"{
            "type": "geometrycollection",
            "geometries": [
                {"type": "circle", "radius": "25m", "coordinates": [1, 2]},
                {"type": "hexagon"}
            ]
        }"#;
        let raw = parse_envelope(json).unwrap();
        assert_eq!(raw.geometries.len(), 2);
        assert_eq!(raw.geometries[0].radius.as_deref(), Some("25m"));
        assert_eq!(raw.geometries[1].kind(), "hexagon");
        assert_eq!(raw.coordinates, None);
    }

    #[test]
    fn missing_or_null_type_is_unknown() {
        let inputs: [&[u8]; 2] = [
            br#"{"coordinates":[1,2]}"#,
            br#"{"type":null,"coordinates":[1,2]}"#,
        ];
        for json in inputs.iter() {
            let raw = parse_envelope(json).unwrap();
            assert_eq!(raw.kind(), "");
            match raw.geometry_type() {
                Err(GeoError::UnknownGeometryType(tag)) => assert_eq!(tag, ""),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn reject_trailing_characters() {
        let result = parse_envelope(br#"{"type":"point","coordinates":[1,2]} x"#);
        assert!(matches!(result, Err(GeoError::MalformedJson(_))));
    }

    #[test]
    fn reject_malformed_json() {
        let result = parse_envelope(br#"{"type":"point","#);
        assert!(matches!(result, Err(GeoError::MalformedJson(_))));
        let result = parse_envelope(b"[1, 2]");
        assert!(matches!(result, Err(GeoError::MalformedJson(_))));
    }

    #[test]
    fn expect_type() {
        let raw = parse_envelope(br#"{"type":"polygon"}"#).unwrap();
        assert!(raw.expect_type(GeometryType::Polygon).is_ok());
        match raw.expect_type(GeometryType::Point) {
            Err(GeoError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, GeometryType::Point);
                assert_eq!(found, GeometryType::Polygon);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn coordinates_at_wrong_depth() {
        let mut raw = parse_envelope(br#"{"type":"point","coordinates":[[1,2]]}"#).unwrap();
        let result = raw.coordinates_as::<Vec<f64>>(GeometryType::Point);
        assert!(matches!(result, Err(GeoError::Coordinates { .. })));

        let mut raw = parse_envelope(br#"{"type":"point"}"#).unwrap();
        let result = raw.coordinates_as::<Vec<f64>>(GeometryType::Point);
        assert!(matches!(
            result,
            Err(GeoError::MissingField {
                field: "coordinates",
                ..
            })
        ));
    }

    #[test]
    fn depth_limit() {
        let options = DecodeOptions::default();
        assert!(options.check_depth(1_000).is_ok());
        let options = DecodeOptions::with_max_collection_depth(2);
        assert!(options.check_depth(2).is_ok());
        assert!(matches!(
            options.check_depth(3),
            Err(GeoError::CollectionTooDeep(2))
        ));
    }
}
