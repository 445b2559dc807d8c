use super::geojson::Entity;
use super::shape::Shape;
use itertools::Itertools;
use serde_json::to_string;
use std::error::Error;
use std::convert::TryFrom;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One canonical shape per line.
    JsonLines,
    /// A single RFC 7946 feature collection.
    GeoJson,
    /// The bounding envelope of every shape, `null` when it has none.
    Bounds,
    /// `<type>\t<count>` for every type present.
    Summary,
}

impl Format {
    pub const NAMES: [&'static str; 4] = ["json-lines", "geojson", "bounds", "summary"];
}

impl FromStr for Format {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "json-lines" => Ok(Format::JsonLines),
            "geojson" => Ok(Format::GeoJson),
            "bounds" => Ok(Format::Bounds),
            "summary" => Ok(Format::Summary),
            _ => Err(format!("unknown output format {:?}", name)),
        }
    }
}

pub trait Output {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_bounds(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_summary(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;

    fn write_format(&self, format: Format, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        match format {
            Format::JsonLines => self.write_json_lines(writer),
            Format::GeoJson => self.write_geojson(writer),
            Format::Bounds => self.write_bounds(writer),
            Format::Summary => self.write_summary(writer),
        }
    }
}

impl Output for Vec<Shape> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for shape in self.iter() {
            let json = to_string(shape)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self
            .iter()
            .map(Entity::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }

    fn write_bounds(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for shape in self.iter() {
            let json = to_string(&shape.bounding_envelope())?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_summary(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let groups = self
            .iter()
            .map(Shape::geometry_type)
            .sorted()
            .group_by(|kind| *kind);
        for (kind, group) in &groups {
            writeln!(writer, "{}\t{}", kind, group.count())?;
        }
        Ok(())
    }
}
