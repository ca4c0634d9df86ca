//! Curated vertex catalogue.
//!
//! 38 canonical Platonic coordinates, each stored as the point of R³ whose
//! stereographic lift is the catalogue rotor. Projecting rotor `n` gives back
//! `CANONICAL_POINTS[n]` to within rounding.
//!
//! | Rows   | Contents                                   |
//! |--------|--------------------------------------------|
//! | 0..8   | cube corners (±1, ±1, ±1)                  |
//! | 8..14  | octahedron axis points (±1, 0, 0) etc.     |
//! | 14..26 | icosahedron (0, ±1, ±φ) and cyclic         |
//! | 26..38 | dodecahedron (0, ±1/φ, ±φ) and cyclic      |

use std::ops::Range;

use crate::error::{Result, RpsError};
use crate::projection::lift;
use crate::rotor::Rotor4;
use crate::source::RotorSource;
use crate::vec3::Point3;
use crate::{INV_PHI, PHI};

pub const CUBE_CORNERS: Range<u32> = 0..8;
pub const OCTAHEDRON_AXES: Range<u32> = 8..14;
pub const ICOSAHEDRON_POINTS: Range<u32> = 14..26;
pub const DODECAHEDRON_FACE_POINTS: Range<u32> = 26..38;

pub const CATALOGUE_LEN: usize = 38;

pub const CANONICAL_POINTS: [Point3; CATALOGUE_LEN] = [
    // cube
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    // octahedron
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    // icosahedron
    [0.0, 1.0, PHI],
    [0.0, -1.0, PHI],
    [0.0, 1.0, -PHI],
    [0.0, -1.0, -PHI],
    [1.0, PHI, 0.0],
    [-1.0, PHI, 0.0],
    [1.0, -PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, 1.0],
    [PHI, 0.0, -1.0],
    [-PHI, 0.0, -1.0],
    // dodecahedron, beyond the cube corners
    [0.0, INV_PHI, PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, -INV_PHI, -PHI],
    [PHI, 0.0, INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, -INV_PHI],
    [INV_PHI, PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [-INV_PHI, -PHI, 0.0],
];

/// Rotor source over [`CANONICAL_POINTS`]
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexCatalogue;

impl VertexCatalogue {
    pub fn new() -> Self {
        Self
    }

    /// Canonical coordinate for row `n`
    pub fn point(&self, n: u32) -> Option<&'static Point3> {
        CANONICAL_POINTS.get(n as usize)
    }
}

impl RotorSource for VertexCatalogue {
    fn name(&self) -> &str {
        "vertex-catalogue"
    }

    fn rotor(&self, n: u32) -> Result<Rotor4> {
        let point = self.point(n).ok_or_else(|| RpsError::IndexOutOfRange {
            source_name: self.name().to_string(),
            index: n,
            len: CATALOGUE_LEN,
        })?;
        lift(point)
    }

    fn len(&self) -> Option<usize> {
        Some(CATALOGUE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotors_are_unit() {
        let cat = VertexCatalogue::new();
        for n in 0..CATALOGUE_LEN as u32 {
            let q = cat.rotor(n).unwrap();
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_projection_recovers_canonical_points() {
        let cat = VertexCatalogue::new();
        for (n, expected) in CANONICAL_POINTS.iter().enumerate() {
            let p = project(&cat.rotor(n as u32).unwrap()).unwrap();
            for i in 0..3 {
                assert_abs_diff_eq!(p[i], expected[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rows_are_distinct() {
        for i in 0..CATALOGUE_LEN {
            for j in (i + 1)..CATALOGUE_LEN {
                assert_ne!(CANONICAL_POINTS[i], CANONICAL_POINTS[j], "rows {} and {}", i, j);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = VertexCatalogue::new().rotor(38).unwrap_err();
        assert!(matches!(err, RpsError::IndexOutOfRange { index: 38, len: 38, .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_ranges_cover_catalogue() {
        assert_eq!(CUBE_CORNERS.end, OCTAHEDRON_AXES.start);
        assert_eq!(OCTAHEDRON_AXES.end, ICOSAHEDRON_POINTS.start);
        assert_eq!(ICOSAHEDRON_POINTS.end, DODECAHEDRON_FACE_POINTS.start);
        assert_eq!(DODECAHEDRON_FACE_POINTS.end as usize, CATALOGUE_LEN);
    }
}
