//! Geometry values found in `geo_shape` fields of Elasticsearch and
//! OpenSearch documents and queries.
//!
//! Every geometry is a JSON object with a lowercase `type` tag. Decoding
//! first reads a [`RawEnvelope`] and then interprets its `coordinates` at the
//! nesting depth of the tagged variant. [`Shape`] covers all nine variants when
//! the type is only known at runtime.
//!
//! ```
//! use es_geo::Shape;
//!
//! let json = br#"{"type":"geometrycollection","geometries":[
//!     {"type":"point","coordinates":[100,0]},
//!     {"type":"linestring","coordinates":[[101,0],[102,1]]}
//! ]}"#;
//! let shape = Shape::from_json(json).unwrap();
//! let collection = shape.as_geometry_collection().unwrap();
//! assert_eq!(collection.len(), 2);
//! assert!(collection.geometries[1].is_line_string());
//! ```
use filter::Filter;
use log::debug;
use output::{Format, Output};
use rayon::prelude::*;
use std::error::Error;
use std::io::{BufRead, Write};

#[macro_use]
mod raw;
mod collection;
pub mod coordinates;
mod error;
pub mod filter;
mod geo;
pub mod geojson;
mod geometry;
mod options;
pub mod output;
pub mod query;
mod shape;
mod types;

pub use self::geo::{Centerable, Location};
pub use collection::GeometryCollection;
pub use coordinates::{LineCoordinates, MultiPolygonCoordinates, PolygonCoordinates, Position};
pub use error::GeoError;
pub use geometry::{
    Circle, Envelope, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use options::{
    new_shape, with_circle, with_envelope, with_geometry_collection, with_line_string,
    with_multi_line_string, with_multi_point, with_multi_polygon, with_point, with_polygon,
    ShapeOption,
};
pub use raw::{parse_envelope, DecodeOptions, RawEnvelope};
pub use shape::Shape;
pub use types::GeometryType;

/// Decode newline-delimited shapes. Blank lines are skipped, lines are decoded
/// in parallel and returned in input order. Errors name the 1-based line.
pub fn decode_lines(
    reader: impl BufRead,
    options: &DecodeOptions,
) -> Result<Vec<Shape>, Box<dyn Error>> {
    let lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|line| (idx + 1, line)))
        .collect::<Result<Vec<_>, _>>()?;
    let shapes = lines
        .par_iter()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            Shape::from_json_with(line.as_bytes(), options).map_err(|source| GeoError::AtLine {
                line: *number,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("decoded {} shapes from {} lines", shapes.len(), lines.len());
    Ok(shapes)
}

pub fn process(
    reader: impl BufRead,
    writer: &mut dyn Write,
    types: &[GeometryType],
    format: Format,
    options: &DecodeOptions,
) -> Result<(), Box<dyn Error>> {
    let shapes: Vec<Shape> = decode_lines(reader, options)?
        .into_iter()
        .filter(|shape| shape.filter(types))
        .collect();
    debug!("{} shapes left after filtering", shapes.len());
    shapes.write_format(format, writer)
}


#[cfg(test)]
mod process {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn filter_by_type() {
        let input = [
            r#"{"type":"point","coordinates":[1,2]}"#,
            r#"{"type":"envelope","coordinates":[[0,1],[1,0]]}"#,
            r#"{"type":"point","coordinates":[3,4]}"#,
        ]
        .join("\n");
        let mut out = Vec::new();
        process(
            Cursor::new(input),
            &mut out,
            &[GeometryType::Envelope],
            Format::JsonLines,
            &DecodeOptions::default(),
        )
        .unwrap();
        let string = String::from_utf8(out).unwrap();
        assert_eq!(
            string,
            "{\"type\":\"envelope\",\"coordinates\":[[0.0,1.0],[1.0,0.0]]}\n"
        );
    }
}
