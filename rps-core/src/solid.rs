//! The five Platonic solids and their curated index tables.
//!
//! | Solid        | V  | E  | F  | Degree | Index rows          |
//! |--------------|----|----|----|--------|---------------------|
//! | Tetrahedron  | 4  | 6  | 4  | 3      | 0, 6, 5, 3          |
//! | Cube         | 8  | 12 | 6  | 3      | 0..8                |
//! | Octahedron   | 6  | 12 | 8  | 4      | 8..14               |
//! | Icosahedron  | 12 | 30 | 20 | 5      | 14..26              |
//! | Dodecahedron | 20 | 30 | 12 | 3      | 0..8, 26..38        |

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::str::FromStr;

use crate::error::{Result, RpsError};
use crate::PHI;

const N_TETRAHEDRON: [u32; 4] = [0, 6, 5, 3];
const N_CUBE: [u32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const N_OCTAHEDRON: [u32; 6] = [8, 9, 10, 11, 12, 13];
const N_ICOSAHEDRON: [u32; 12] = [14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25];
const N_DODECAHEDRON: [u32; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
];

/// A rotation axis of order `order` (rotation angle 2π/order)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationGenerator {
    pub axis: [f64; 3],
    pub order: u32,
}

impl RotationGenerator {
    pub fn angle(&self) -> f64 {
        TAU / self.order as f64
    }
}

const TETRAHEDRAL: [RotationGenerator; 2] = [
    RotationGenerator { axis: [1.0, 1.0, 1.0], order: 3 },
    RotationGenerator { axis: [0.0, 0.0, 1.0], order: 2 },
];

const OCTAHEDRAL: [RotationGenerator; 2] = [
    RotationGenerator { axis: [0.0, 0.0, 1.0], order: 4 },
    RotationGenerator { axis: [1.0, 1.0, 1.0], order: 3 },
];

// The two icosahedral orientations differ by the 5-fold axis: the catalogue
// icosahedron has a vertex on (0, 1, φ), the dodecahedron a face centre on
// (0, φ, 1).
const ICOSAHEDRAL_VERTEX_AXIS: [RotationGenerator; 3] = [
    RotationGenerator { axis: [0.0, 1.0, PHI], order: 5 },
    RotationGenerator { axis: [1.0, 1.0, 1.0], order: 3 },
    RotationGenerator { axis: [0.0, 0.0, 1.0], order: 2 },
];

const ICOSAHEDRAL_FACE_AXIS: [RotationGenerator; 3] = [
    RotationGenerator { axis: [0.0, PHI, 1.0], order: 5 },
    RotationGenerator { axis: [1.0, 1.0, 1.0], order: 3 },
    RotationGenerator { axis: [0.0, 0.0, 1.0], order: 2 },
];

/// One of the five convex regular polyhedra
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatonicSolid {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl PlatonicSolid {
    /// All solids in canonical order
    pub const ALL: [PlatonicSolid; 5] = [
        PlatonicSolid::Tetrahedron,
        PlatonicSolid::Cube,
        PlatonicSolid::Octahedron,
        PlatonicSolid::Icosahedron,
        PlatonicSolid::Dodecahedron,
    ];

    /// Lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            PlatonicSolid::Tetrahedron => "tetrahedron",
            PlatonicSolid::Cube => "cube",
            PlatonicSolid::Octahedron => "octahedron",
            PlatonicSolid::Icosahedron => "icosahedron",
            PlatonicSolid::Dodecahedron => "dodecahedron",
        }
    }

    /// Every valid identifier
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron => 4,
            PlatonicSolid::Cube => 8,
            PlatonicSolid::Octahedron => 6,
            PlatonicSolid::Icosahedron => 12,
            PlatonicSolid::Dodecahedron => 20,
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron => 6,
            PlatonicSolid::Cube | PlatonicSolid::Octahedron => 12,
            PlatonicSolid::Icosahedron | PlatonicSolid::Dodecahedron => 30,
        }
    }

    pub fn face_count(&self) -> usize {
        // Euler: V − E + F = 2
        2 + self.edge_count() - self.vertex_count()
    }

    /// Edges meeting at each vertex
    pub fn degree(&self) -> usize {
        2 * self.edge_count() / self.vertex_count()
    }

    /// The dual solid (faces ↔ vertices)
    pub fn dual(&self) -> PlatonicSolid {
        match self {
            PlatonicSolid::Tetrahedron => PlatonicSolid::Tetrahedron,
            PlatonicSolid::Cube => PlatonicSolid::Octahedron,
            PlatonicSolid::Octahedron => PlatonicSolid::Cube,
            PlatonicSolid::Icosahedron => PlatonicSolid::Dodecahedron,
            PlatonicSolid::Dodecahedron => PlatonicSolid::Icosahedron,
        }
    }

    /// Curated rows of the vertex catalogue, in output order
    pub fn index_set(&self) -> &'static [u32] {
        match self {
            PlatonicSolid::Tetrahedron => &N_TETRAHEDRON,
            PlatonicSolid::Cube => &N_CUBE,
            PlatonicSolid::Octahedron => &N_OCTAHEDRON,
            PlatonicSolid::Icosahedron => &N_ICOSAHEDRON,
            PlatonicSolid::Dodecahedron => &N_DODECAHEDRON,
        }
    }

    /// Generators of the rotation group, in the catalogue's orientation
    pub fn rotation_generators(&self) -> &'static [RotationGenerator] {
        match self {
            PlatonicSolid::Tetrahedron => &TETRAHEDRAL,
            PlatonicSolid::Cube | PlatonicSolid::Octahedron => &OCTAHEDRAL,
            PlatonicSolid::Icosahedron => &ICOSAHEDRAL_VERTEX_AXIS,
            PlatonicSolid::Dodecahedron => &ICOSAHEDRAL_FACE_AXIS,
        }
    }

    /// Order of the rotation group
    pub fn rotation_group_order(&self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron => 12,
            PlatonicSolid::Cube | PlatonicSolid::Octahedron => 24,
            PlatonicSolid::Icosahedron | PlatonicSolid::Dodecahedron => 60,
        }
    }
}

impl FromStr for PlatonicSolid {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|solid| solid.name() == wanted)
            .ok_or_else(|| RpsError::UnknownSolid {
                name: s.to_string(),
                valid: Self::names(),
            })
    }
}

impl std::fmt::Display for PlatonicSolid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
