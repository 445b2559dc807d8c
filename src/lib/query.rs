//! The `geo_shape` query, which embeds a shape in a search request body.
use super::shape::Shape;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpatialRelation {
    Intersects,
    Disjoint,
    Within,
    Contains,
}

/// A shape stored in another document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IndexedShape {
    pub index: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl IndexedShape {
    pub fn new(index: impl Into<String>, id: impl Into<String>) -> Self {
        IndexedShape {
            index: index.into(),
            id: id.into(),
            path: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ShapeSource {
    Shape(Shape),
    IndexedShape(IndexedShape),
}

/// ```
/// use es_geo::query::{GeoShapeQuery, SpatialRelation};
/// use es_geo::{Envelope, Shape};
///
/// let shape: Shape = Envelope::new(vec![13.0, 53.0], vec![14.0, 52.0]).into();
/// let query = GeoShapeQuery::new("location", shape).relation(SpatialRelation::Within);
/// let json = serde_json::to_value(&query).unwrap();
/// assert_eq!(json["geo_shape"]["location"]["relation"], "within");
/// assert_eq!(json["geo_shape"]["location"]["shape"]["type"], "envelope");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoShapeQuery {
    field: String,
    source: ShapeSource,
    relation: Option<SpatialRelation>,
    ignore_unmapped: Option<bool>,
}

impl GeoShapeQuery {
    pub fn new(field: impl Into<String>, shape: Shape) -> Self {
        GeoShapeQuery {
            field: field.into(),
            source: ShapeSource::Shape(shape),
            relation: None,
            ignore_unmapped: None,
        }
    }

    pub fn indexed(field: impl Into<String>, shape: IndexedShape) -> Self {
        GeoShapeQuery {
            field: field.into(),
            source: ShapeSource::IndexedShape(shape),
            relation: None,
            ignore_unmapped: None,
        }
    }

    pub fn relation(mut self, relation: SpatialRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn ignore_unmapped(mut self, ignore_unmapped: bool) -> Self {
        self.ignore_unmapped = Some(ignore_unmapped);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn source(&self) -> &ShapeSource {
        &self.source
    }
}

#[derive(Serialize)]
struct FieldClause<'a> {
    #[serde(flatten)]
    source: &'a ShapeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    relation: Option<SpatialRelation>,
}

struct GeoShapeBody<'a>(&'a GeoShapeQuery);

impl Serialize for GeoShapeBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let query = self.0;
        let mut map = serializer.serialize_map(None)?;
        let clause = FieldClause {
            source: &query.source,
            relation: query.relation,
        };
        map.serialize_entry(&query.field, &clause)?;
        if let Some(ignore_unmapped) = query.ignore_unmapped {
            map.serialize_entry("ignore_unmapped", &ignore_unmapped)?;
        }
        map.end()
    }
}

impl Serialize for GeoShapeQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("geo_shape", &GeoShapeBody(self))?;
        map.end()
    }
}
