use super::error::GeoError;
use super::shape::Shape;
use super::types::GeometryType;

/// Parse a comma-separated list of geometry tags.
///
/// Shapes are kept when they match any of the given tags
/// (`point,polygon`). Whitespace around a tag is ignored, empty entries are
/// skipped and an unknown tag is an error.
///
/// # Example
///
/// ```
/// use es_geo::filter::parse;
/// use es_geo::GeometryType;
///
/// let types = parse("point, polygon").unwrap();
/// assert_eq!(types, vec![GeometryType::Point, GeometryType::Polygon]);
/// assert!(parse("point,hexagon").is_err());
/// ```
pub fn parse(selector_str: &str) -> Result<Vec<GeometryType>, GeoError> {
    selector_str
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::parse::<GeometryType>)
        .collect()
}

pub trait Filter {
    fn filter(&self, types: &[GeometryType]) -> bool;
}

/// An empty list matches everything. A collection matches when its own tag or
/// the tag of any nested geometry does.
impl Filter for Shape {
    fn filter(&self, types: &[GeometryType]) -> bool {
        if types.is_empty() || types.contains(&self.geometry_type()) {
            return true;
        }
        match self {
            Shape::GeometryCollection(collection) => {
                collection.iter().any(|shape| shape.filter(types))
            }
            _ => false,
        }
    }
}
