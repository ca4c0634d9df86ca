//! Vertex array export.
//!
//! Two flat formats: CSV with an `x,y,z` header and one row per vertex, and
//! a JSON document carrying the vertices plus the edge list.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, RpsError};
use crate::selector::SolidVertices;
use crate::solid::PlatonicSolid;
use crate::vec3::Point3;
use crate::verify::Edge;

/// Output format for exported vertex arrays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{}' (expected csv or json)", other)),
        }
    }
}

/// JSON document for one solid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolidDocument {
    pub solid: PlatonicSolid,
    pub edge_length: f64,
    pub indices: Vec<u32>,
    pub vertices: Vec<Point3>,
    pub edges: Vec<Edge>,
}

impl From<&SolidVertices> for SolidDocument {
    fn from(table: &SolidVertices) -> Self {
        Self {
            solid: table.solid,
            edge_length: table.edge_length,
            indices: table.indices.clone(),
            vertices: table.points.clone(),
            edges: table.edges.clone(),
        }
    }
}

/// Write `points` as CSV rows
pub fn write_csv<W: Write>(mut writer: W, points: &[Point3]) -> Result<()> {
    writeln!(writer, "x,y,z")?;
    for [x, y, z] in points {
        writeln!(writer, "{},{},{}", x, y, z)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a solid as a pretty-printed JSON document
pub fn write_json<W: Write>(mut writer: W, table: &SolidVertices) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &SolidDocument::from(table))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a solid in `format`
pub fn write_solid<W: Write>(writer: W, table: &SolidVertices, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(writer, &table.points),
        ExportFormat::Json => write_json(writer, table),
    }
}

/// Write a solid to `path`, replacing any existing file
pub fn export_to_path(path: &Path, table: &SolidVertices, format: ExportFormat) -> Result<()> {
    let file = File::create(path)?;
    write_solid(BufWriter::new(file), table, format)?;
    tracing::info!(solid = table.solid.name(), path = %path.display(), ?format, "exported vertices");
    Ok(())
}

/// Parse CSV rows written by [`write_csv`]
pub fn read_csv(input: &str) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || (line_no == 0 && line.starts_with('x')) {
            continue;
        }

        let mut coords = [0.0; 3];
        let mut fields = line.split(',');
        for coord in coords.iter_mut() {
            let field = fields.next().ok_or_else(|| csv_error(line_no, "missing column"))?;
            *coord = field
                .trim()
                .parse()
                .map_err(|_| csv_error(line_no, "invalid number"))?;
        }
        if fields.next().is_some() {
            return Err(csv_error(line_no, "too many columns"));
        }
        points.push(coords);
    }
    Ok(points)
}

fn csv_error(line_no: usize, what: &str) -> RpsError {
    RpsError::CsvParse {
        line: line_no + 1,
        reason: what.to_string(),
    }
}
