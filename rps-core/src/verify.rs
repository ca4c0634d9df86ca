//! Verification of projected vertex sets.
//!
//! These checks consume plain point lists, so they work equally on selector
//! output and on externally supplied coordinates:
//! - edge uniformity over the shortest pairwise distances
//! - all points on a common sphere about the origin
//! - golden-ratio coordinate ratios (icosahedral solids)
//! - invariance under a solid's rotation-group generators

use serde::{Deserialize, Serialize};

use crate::solid::{PlatonicSolid, RotationGenerator};
use crate::vec3::{self, Point3};
use crate::{DEFAULT_EDGE_TOLERANCE, PHI};

/// Relative window above the minimum distance for edge candidates
const EDGE_WINDOW: f64 = 1e-3;

/// Relative gap required between the longest edge and the next pair
const EDGE_GAP: f64 = 0.1;

/// An unordered vertex pair `(i, j)` with `i < j`
pub type Edge = (usize, usize);

/// All pairwise distances as `(i, j, d)` with `i < j`
pub fn pairwise_distances(points: &[Point3]) -> Vec<(usize, usize, f64)> {
    let mut out = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            out.push((i, j, vec3::distance(&points[i], &points[j])));
        }
    }
    out
}

/// Smallest pairwise distance, `None` for fewer than two points
pub fn min_distance(points: &[Point3]) -> Option<f64> {
    pairwise_distances(points)
        .into_iter()
        .map(|(_, _, d)| d)
        .min_by(|a, b| a.total_cmp(b))
}

/// Pairs within a fixed small window of the minimum distance.
///
/// For a regular polyhedron these are exactly its edges.
pub fn shortest_edges(points: &[Point3]) -> Vec<Edge> {
    let Some(min) = min_distance(points) else {
        return Vec::new();
    };
    let cutoff = min * (1.0 + EDGE_WINDOW);

    pairwise_distances(points)
        .into_iter()
        .filter(|&(_, _, d)| d <= cutoff)
        .map(|(i, j, _)| (i, j))
        .collect()
}

/// The `count` closest pairs, provided they are clearly separated from the rest.
///
/// Returns `None` when there are fewer than `count` pairs or when the next
/// pair is within [`EDGE_GAP`] of the longest selected one. Whether the
/// selected pairs share one length is left to [`edge_uniformity`].
pub fn nearest_pairs(points: &[Point3], count: usize) -> Option<Vec<Edge>> {
    let mut distances = pairwise_distances(points);
    if distances.len() < count {
        return None;
    }
    distances.sort_by(|a, b| a.2.total_cmp(&b.2));

    let longest = distances[..count].iter().map(|&(_, _, d)| d).fold(0.0, f64::max);
    if let Some(&(_, _, next)) = distances.get(count) {
        if next <= longest * (1.0 + EDGE_GAP) {
            return None;
        }
    }

    let mut edges: Vec<Edge> = distances[..count].iter().map(|&(i, j, _)| (i, j)).collect();
    edges.sort_unstable();
    Some(edges)
}

/// Number of edges touching each vertex
pub fn vertex_degrees(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut degrees = vec![0; vertex_count];
    for &(i, j) in edges {
        degrees[i] += 1;
        degrees[j] += 1;
    }
    degrees
}

/// Edge-length statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub edge_count: usize,
    pub min_length: f64,
    pub max_length: f64,
    /// (max − min) / min
    pub relative_deviation: f64,
    pub passed: bool,
}

/// Check that the given edges share one length within `rel_tolerance`
pub fn edge_uniformity(points: &[Point3], edges: &[Edge], rel_tolerance: f64) -> EdgeReport {
    let lengths: Vec<f64> = edges
        .iter()
        .map(|&(i, j)| vec3::distance(&points[i], &points[j]))
        .collect();

    if lengths.is_empty() {
        return EdgeReport {
            edge_count: 0,
            min_length: 0.0,
            max_length: 0.0,
            relative_deviation: 0.0,
            passed: true,
        };
    }

    let min = lengths.iter().copied().fold(f64::INFINITY, f64::min);
    let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let relative_deviation = if min > 0.0 { (max - min) / min } else { f64::INFINITY };

    EdgeReport {
        edge_count: lengths.len(),
        min_length: min,
        max_length: max,
        relative_deviation,
        passed: relative_deviation <= rel_tolerance,
    }
}

/// Distance-from-origin statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereReport {
    pub mean_radius: f64,
    pub max_deviation: f64,
    pub passed: bool,
}

/// Check that every point lies on a common sphere about the origin
pub fn common_sphere(points: &[Point3], tolerance: f64) -> SphereReport {
    if points.is_empty() {
        return SphereReport {
            mean_radius: 0.0,
            max_deviation: 0.0,
            passed: true,
        };
    }

    let norms: Vec<f64> = points.iter().map(vec3::norm).collect();
    let mean_radius = norms.iter().sum::<f64>() / norms.len() as f64;
    let max_deviation = norms
        .iter()
        .map(|r| (r - mean_radius).abs())
        .fold(0.0, f64::max);

    SphereReport {
        mean_radius,
        max_deviation,
        passed: max_deviation < tolerance,
    }
}

/// True if some point has a coordinate ratio within `tolerance` of φ
pub fn has_golden_ratio(points: &[Point3], tolerance: f64) -> bool {
    let ratio = |a: f64, b: f64| -> Option<f64> {
        if b.abs() < f64::EPSILON {
            None
        } else {
            Some((a / b).abs())
        }
    };

    points.iter().any(|&[x, y, z]| {
        [ratio(x, y), ratio(y, z), ratio(x, z), ratio(y, x), ratio(z, y), ratio(z, x)]
            .into_iter()
            .flatten()
            .any(|r| (r - PHI).abs() < tolerance)
    })
}

/// True if rotating every point by `generator` lands on the set again
pub fn invariant_under(points: &[Point3], generator: &RotationGenerator, tolerance: f64) -> bool {
    let angle = generator.angle();
    points.iter().all(|p| {
        let rotated = vec3::rotate_about(p, &generator.axis, angle);
        points.iter().any(|q| vec3::distance(&rotated, q) < tolerance)
    })
}

/// True if the set is invariant under every generator of `solid`'s rotation group
pub fn has_rotation_symmetry(points: &[Point3], solid: PlatonicSolid, tolerance: f64) -> bool {
    solid
        .rotation_generators()
        .iter()
        .all(|g| invariant_under(points, g, tolerance))
}

/// Which checks [`full_verify`] runs
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyOptions {
    pub tolerance: f64,
    pub check_golden_ratio: bool,
    /// Also check rotation symmetry and edge count for this solid
    pub solid: Option<PlatonicSolid>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_EDGE_TOLERANCE,
            check_golden_ratio: false,
            solid: None,
        }
    }
}

/// Combined result of [`full_verify`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub vertex_count: usize,
    pub edges: EdgeReport,
    pub sphere: SphereReport,
    pub golden_ratio: Option<bool>,
    pub symmetric: Option<bool>,
    pub passed: bool,
}

/// Run every applicable check and log the outcome
pub fn full_verify(points: &[Point3], options: &VerifyOptions) -> VerificationReport {
    let edges = options
        .solid
        .and_then(|solid| nearest_pairs(points, solid.edge_count()))
        .unwrap_or_else(|| shortest_edges(points));
    let mut edge_report = edge_uniformity(points, &edges, options.tolerance);
    if let Some(solid) = options.solid {
        if edge_report.edge_count != solid.edge_count() {
            edge_report.passed = false;
        }
    }

    // Sphere deviation is absolute; scale by radius-sized coordinates
    let sphere = common_sphere(points, options.tolerance.max(f64::EPSILON) * 10.0);
    let golden_ratio = options
        .check_golden_ratio
        .then(|| has_golden_ratio(points, 1e-3));
    let symmetric = options
        .solid
        .map(|solid| has_rotation_symmetry(points, solid, 1e-9_f64.max(options.tolerance)));

    if edge_report.passed {
        tracing::info!(edges = edge_report.edge_count, length = edge_report.min_length, "all edges equal within tolerance");
    } else {
        tracing::warn!(
            edges = edge_report.edge_count,
            deviation = edge_report.relative_deviation,
            "edge lengths differ by more than tolerance"
        );
    }
    if sphere.passed {
        tracing::info!(radius = sphere.mean_radius, "all vertices lie on a common sphere");
    } else {
        tracing::warn!(deviation = sphere.max_deviation, "vertex distances from centre vary beyond tolerance");
    }
    match golden_ratio {
        Some(true) => tracing::info!("golden ratio detected in coordinate ratios"),
        Some(false) => tracing::warn!("no golden ratio found within tolerance"),
        None => {}
    }
    if symmetric == Some(false) {
        tracing::warn!("point set is not invariant under the rotation group");
    }

    let passed = edge_report.passed
        && sphere.passed
        && golden_ratio.unwrap_or(true)
        && symmetric.unwrap_or(true);

    VerificationReport {
        vertex_count: points.len(),
        edges: edge_report,
        sphere,
        golden_ratio,
        symmetric,
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Point3> {
        vec![
            [1.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0],
            [-1.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
        ]
    }

    #[test]
    fn test_pairwise_distances() {
        let d = pairwise_distances(&square());
        assert_eq!(d.len(), 6);
        assert_abs_diff_eq!(min_distance(&square()).unwrap(), 2.0);
        assert!(min_distance(&[[0.0; 3]]).is_none());
    }

    #[test]
    fn test_shortest_edges_of_square() {
        let edges = shortest_edges(&square());
        assert_eq!(edges, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
        assert_eq!(vertex_degrees(4, &edges), vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_nearest_pairs_need_a_gap() {
        assert_eq!(
            nearest_pairs(&square(), 4),
            Some(vec![(0, 1), (0, 3), (1, 2), (2, 3)])
        );
        // The fourth side ties with the third
        assert_eq!(nearest_pairs(&square(), 3), None);
        assert_eq!(nearest_pairs(&square(), 6).map(|e| e.len()), Some(6));
        assert_eq!(nearest_pairs(&square(), 7), None);
    }

    #[test]
    fn test_nearest_pairs_ignore_uniformity() {
        // A 5% stretch still leaves the sides well short of the diagonals
        let mut pts = square();
        pts[0][0] = 1.1;
        pts[3][0] = 1.1;
        let edges = nearest_pairs(&pts, 4).unwrap();
        assert_eq!(edges.len(), 4);
        assert!(!edge_uniformity(&pts, &edges, 1e-6).passed);
        assert!(edge_uniformity(&pts, &edges, 0.1).passed);
    }

    #[test]
    fn test_edge_uniformity_detects_perturbation() {
        let mut pts = square();
        let edges = shortest_edges(&pts);
        assert!(edge_uniformity(&pts, &edges, 1e-6).passed);

        pts[0][0] += 1e-3;
        let report = edge_uniformity(&pts, &edges, 1e-6);
        assert!(!report.passed);
        assert!(report.relative_deviation > 1e-4);
    }

    #[test]
    fn test_common_sphere() {
        assert!(common_sphere(&square(), 1e-9).passed);
        let mut pts = square();
        pts.push([0.0, 0.0, 0.0]);
        assert!(!common_sphere(&pts, 1e-9).passed);
    }

    #[test]
    fn test_golden_ratio() {
        assert!(has_golden_ratio(&[[0.0, 1.0, PHI]], 1e-3));
        assert!(!has_golden_ratio(&square(), 1e-3));
        assert!(!has_golden_ratio(&[[0.0, 0.0, 0.0]], 1e-3));
    }

    #[test]
    fn test_square_quarter_turn_invariance() {
        let quarter = RotationGenerator { axis: [0.0, 0.0, 1.0], order: 4 };
        assert!(invariant_under(&square(), &quarter, 1e-9));
        let third = RotationGenerator { axis: [0.0, 0.0, 1.0], order: 3 };
        assert!(!invariant_under(&square(), &third, 1e-9));
    }

    #[test]
    fn test_empty_sets_pass() {
        let report = full_verify(&[], &VerifyOptions::default());
        assert!(report.passed);
        assert_eq!(report.vertex_count, 0);
    }
}
