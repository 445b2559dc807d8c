use super::error::GeoError;
use super::geometry::Geometry;
use super::raw::{DecodeOptions, RawEnvelope};
use super::shape::{decode_shape, Shape};
use super::types::GeometryType;
use log::trace;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An ordered, possibly empty, list of geometries of any type, including
/// further collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    pub geometries: Vec<Shape>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Shape>) -> Self {
        GeometryCollection { geometries }
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.geometries.iter()
    }

    pub fn from_envelope_with(
        envelope: RawEnvelope,
        options: &DecodeOptions,
    ) -> Result<Self, GeoError> {
        decode_collection(envelope, options, 1)
    }
}

/// Decode a collection found at nesting `depth`. Elements are decoded in
/// order and the first failure aborts the whole collection.
pub(crate) fn decode_collection(
    envelope: RawEnvelope,
    options: &DecodeOptions,
    depth: usize,
) -> Result<GeometryCollection, GeoError> {
    envelope.expect_type(GeometryType::GeometryCollection)?;
    options.check_depth(depth)?;
    trace!(
        "decoding {} geometries at depth {}",
        envelope.geometries.len(),
        depth
    );
    let geometries = envelope
        .geometries
        .into_iter()
        .map(|element| decode_shape(element, options, depth))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GeometryCollection { geometries })
}

impl Geometry for GeometryCollection {
    const TYPE: GeometryType = GeometryType::GeometryCollection;

    fn from_envelope(envelope: RawEnvelope) -> Result<Self, GeoError> {
        Self::from_envelope_with(envelope, &DecodeOptions::default())
    }
}

impl Serialize for GeometryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GeometryCollection", 2)?;
        state.serialize_field("type", &Self::TYPE)?;
        state.serialize_field("geometries", &self.geometries)?;
        state.end()
    }
}

deserialize_from_envelope!(
    GeometryCollection,
    <GeometryCollection as Geometry>::from_envelope
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn point_and_line_string() {
        let json = br#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[100,0]},{"type":"linestring","coordinates":[[101,0],[102,1]]}]}"#;
        let collection = GeometryCollection::from_json(json).unwrap();
        assert_eq!(collection.len(), 2);

        let point = collection.geometries[0].as_point().unwrap();
        assert_eq!(point.coordinates, vec![100., 0.]);

        let line = collection.geometries[1].as_line_string().unwrap();
        assert_eq!(line.coordinates.len(), 2);
        assert_eq!(line.coordinates[1], vec![102., 1.]);
    }

    #[test]
    fn empty_collection() {
        let collection =
            GeometryCollection::from_json(br#"{"type":"geometrycollection","geometries":[]}"#)
                .unwrap();
        assert!(collection.is_empty());

        let collection = GeometryCollection::from_json(br#"{"type":"geometrycollection"}"#).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn unknown_element_aborts() {
        let json = br#"{"type":"geometrycollection","geometries":[{"type":"point","coordinates":[1,2]},{"type":"hexagon","coordinates":[]}]}"#;
        match GeometryCollection::from_json(json) {
            Err(GeoError::UnknownGeometryType(tag)) => assert_eq!(tag, "hexagon"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn broken_element_aborts() {
        let json = br#"{"type":"geometrycollection","geometries":[{"type":"polygon","coordinates":[1,2]}]}"#;
        let result = GeometryCollection::from_json(json);
        assert!(matches!(
            result,
            Err(GeoError::Coordinates {
                kind: GeometryType::Polygon,
                ..
            })
        ));
    }

    #[test]
    fn nested_collections() {
        let json = json!({
            "type": "geometrycollection",
            "geometries": [
                {"type": "envelope", "coordinates": [[0.0, 1.0], [1.0, 0.0]]},
                {
                    "type": "geometrycollection",
                    "geometries": [
                        {"type": "circle", "coordinates": [1.0, 2.0], "radius": "10km"}
                    ]
                }
            ]
        });
        let collection: GeometryCollection = serde_json::from_value(json.clone()).unwrap();
        assert!(collection.geometries[0].is_envelope());
        let inner = collection.geometries[1].as_geometry_collection().unwrap();
        assert!(inner.geometries[0].is_circle());
        assert_eq!(to_value(&collection).unwrap(), json);
    }

    // Unlimited by default, guarded only when a limit is configured.
    #[test]
    fn nesting_limit() {
        let mut json = json!({"type": "point", "coordinates": [1.0, 2.0]});
        for _ in 0..5 {
            json = json!({"type": "geometrycollection", "geometries": [json]});
        }
        let bytes = serde_json::to_vec(&json).unwrap();

        let envelope = RawEnvelope::parse(&bytes).unwrap();
        assert!(GeometryCollection::from_envelope(envelope).is_ok());

        let envelope = RawEnvelope::parse(&bytes).unwrap();
        let options = DecodeOptions::with_max_collection_depth(5);
        assert!(GeometryCollection::from_envelope_with(envelope, &options).is_ok());

        let envelope = RawEnvelope::parse(&bytes).unwrap();
        let options = DecodeOptions::with_max_collection_depth(4);
        let result = GeometryCollection::from_envelope_with(envelope, &options);
        assert!(matches!(result, Err(GeoError::CollectionTooDeep(4))));
    }

    #[test]
    fn nesting_beyond_json_recursion_limit() {
        let mut json = String::from(r#"{"type":"point","coordinates":[1.0,2.0]}"#);
        for _ in 0..70 {
            json = format!(r#"{{"type":"geometrycollection","geometries":[{}]}}"#, json);
        }

        let shape = Shape::from_json(json.as_bytes()).unwrap();
        let mut depth = 0;
        let mut current = &shape;
        while let Some(collection) = current.as_geometry_collection() {
            depth += 1;
            current = &collection.geometries[0];
        }
        assert_eq!(depth, 70);
        assert!(current.is_point());

        let options = DecodeOptions::with_max_collection_depth(70);
        assert!(Shape::from_json_with(json.as_bytes(), &options).is_ok());

        let options = DecodeOptions::with_max_collection_depth(69);
        let result = Shape::from_json_with(json.as_bytes(), &options);
        assert!(matches!(result, Err(GeoError::CollectionTooDeep(69))));
    }

    #[test]
    fn preserve_order_on_encode() {
        let collection = GeometryCollection::new(vec![
            Shape::from(crate::Circle::new(vec![0., 0.], "1m")),
            Shape::from(crate::Point::new(vec![1., 1.])),
        ]);
        let value = to_value(&collection).unwrap();
        assert_eq!(value["type"], "geometrycollection");
        assert_eq!(value["geometries"][0]["type"], "circle");
        assert_eq!(value["geometries"][1]["type"], "point");
    }
}
