//! Solid selector: index tables → validated vertex sets.
//!
//! All five tables are projected and validated when the selector is built.
//! A table that yields the wrong number of points, coincident points, or an
//! edge graph that is not the solid's is a configuration error and the
//! selector is never constructed.

use serde::{Deserialize, Serialize};

use crate::catalogue::VertexCatalogue;
use crate::config::SelectorConfig;
use crate::error::{Result, RpsError};
use crate::projection::project_indices;
use crate::rotor::Rotor4;
use crate::solid::PlatonicSolid;
use crate::source::RotorSource;
use crate::vec3::{self, Point3};
use crate::verify::{edge_uniformity, nearest_pairs, vertex_degrees, Edge};

/// Validated vertex set of one solid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolidVertices {
    pub solid: PlatonicSolid,
    /// Rotor indices, in output order
    pub indices: Vec<u32>,
    /// q̂ₙ for each index
    pub rotors: Vec<Rotor4>,
    /// Π(q̂ₙ) for each index
    pub points: Vec<Point3>,
    /// Vertex pairs (positions into `points`) joined by an edge
    pub edges: Vec<Edge>,
    pub edge_length: f64,
}

impl SolidVertices {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance from the origin shared by all vertices
    pub fn circumradius(&self) -> f64 {
        self.points.first().map(vec3::norm).unwrap_or(0.0)
    }
}

/// Immutable lookup of the five validated Platonic vertex sets
#[derive(Clone, Debug)]
pub struct SolidSelector {
    source_name: String,
    config: SelectorConfig,
    /// One entry per solid, in `PlatonicSolid::ALL` order
    tables: Vec<SolidVertices>,
}

impl SolidSelector {
    /// Selector over the vertex catalogue with default tolerances
    pub fn new() -> Result<Self> {
        Self::with_config(SelectorConfig::default())
    }

    /// Selector over the vertex catalogue
    pub fn with_config(config: SelectorConfig) -> Result<Self> {
        Self::with_source(&VertexCatalogue::new(), config)
    }

    /// Selector drawing every solid's curated indices from `source`
    pub fn with_source<S: RotorSource + ?Sized>(source: &S, config: SelectorConfig) -> Result<Self> {
        let tables = PlatonicSolid::ALL
            .iter()
            .map(|&solid| build_solid(source, solid, solid.index_set(), &config))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(source = source.name(), solids = tables.len(), "solid selector ready");

        Ok(Self {
            source_name: source.name().to_string(),
            config,
            tables,
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Full validated table for `solid`
    pub fn solid(&self, solid: PlatonicSolid) -> &SolidVertices {
        &self.tables[slot(solid)]
    }

    /// Ordered vertex coordinates for `solid`
    pub fn vertices(&self, solid: PlatonicSolid) -> &[Point3] {
        &self.solid(solid).points
    }

    /// Ordered vertex coordinates by case-insensitive name
    pub fn vertices_by_name(&self, name: &str) -> Result<&[Point3]> {
        let solid: PlatonicSolid = name.parse()?;
        Ok(self.vertices(solid))
    }

    /// All tables in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &SolidVertices> {
        self.tables.iter()
    }
}

fn slot(solid: PlatonicSolid) -> usize {
    match solid {
        PlatonicSolid::Tetrahedron => 0,
        PlatonicSolid::Cube => 1,
        PlatonicSolid::Octahedron => 2,
        PlatonicSolid::Icosahedron => 3,
        PlatonicSolid::Dodecahedron => 4,
    }
}

/// Project and validate one index table.
///
/// Exposed so callers can check candidate tables against any rotor source.
pub fn build_solid<S: RotorSource + ?Sized>(
    source: &S,
    solid: PlatonicSolid,
    indices: &[u32],
    config: &SelectorConfig,
) -> Result<SolidVertices> {
    let batch = project_indices(source, indices, config.pole_tolerance)?;

    if !batch.excluded.is_empty() {
        let dropped: Vec<u32> = batch.excluded.iter().map(|e| e.index).collect();
        tracing::error!(solid = solid.name(), ?dropped, "curated index set hits the projection pole");
    }

    let expected = solid.vertex_count();
    if batch.points.len() != expected {
        return Err(RpsError::VertexCountMismatch {
            solid: solid.name().to_string(),
            expected,
            actual: batch.points.len(),
        });
    }

    let indices: Vec<u32> = batch.points.iter().map(|p| p.index).collect();
    let rotors: Vec<Rotor4> = batch.points.iter().map(|p| p.rotor).collect();
    let points = batch.coordinates();

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let distance = vec3::distance(&points[i], &points[j]);
            if distance < config.coincidence_tolerance {
                return Err(RpsError::CoincidentVertices {
                    solid: solid.name().to_string(),
                    first: indices[i],
                    second: indices[j],
                    distance,
                });
            }
        }
    }

    let Some(edges) = nearest_pairs(&points, solid.edge_count()) else {
        return Err(RpsError::IrregularEdges {
            solid: solid.name().to_string(),
            reason: format!("the {} closest pairs are not separated from the rest", solid.edge_count()),
        });
    };

    let degrees = vertex_degrees(points.len(), &edges);
    if let Some((vertex, &degree)) = degrees.iter().enumerate().find(|&(_, &d)| d != solid.degree()) {
        return Err(RpsError::IrregularEdges {
            solid: solid.name().to_string(),
            reason: format!(
                "vertex n={} has {} neighbours, expected {}",
                indices[vertex],
                degree,
                solid.degree()
            ),
        });
    }

    let report = edge_uniformity(&points, &edges, config.edge_tolerance);
    if !report.passed {
        return Err(RpsError::IrregularEdges {
            solid: solid.name().to_string(),
            reason: format!("edge lengths vary by {:e} (relative)", report.relative_deviation),
        });
    }

    tracing::debug!(
        solid = solid.name(),
        source = source.name(),
        vertices = points.len(),
        edge_length = report.min_length,
        "validated index set"
    );

    Ok(SolidVertices {
        solid,
        indices,
        rotors,
        points,
        edges,
        edge_length: report.min_length,
    })
}
