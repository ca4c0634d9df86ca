//! Stereographic projection S³ \ {pole} → R³ and its inverse.
//!
//! Π(x, y, z, w) = (x, y, z) / (1 − w). The pole (0, 0, 0, 1) has no image;
//! hitting it is reported as [`RpsError::ProjectionPole`] instead of letting
//! Inf/NaN leak into vertex sets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RpsError};
use crate::rotor::Rotor4;
use crate::source::RotorSource;
use crate::vec3::{self, Point3};
use crate::DEFAULT_POLE_TOLERANCE;

/// Project a unit rotor using the default pole tolerance
pub fn project(q: &Rotor4) -> Result<Point3> {
    project_with_tolerance(q, DEFAULT_POLE_TOLERANCE)
}

/// Project a unit rotor; fails when |1 − w| ≤ `pole_tolerance`
pub fn project_with_tolerance(q: &Rotor4, pole_tolerance: f64) -> Result<Point3> {
    if !q.is_finite() {
        return Err(RpsError::NonFiniteInput {
            what: "rotor component",
            value: q.to_array().into_iter().find(|c| !c.is_finite()).unwrap_or(f64::NAN),
        });
    }
    debug_assert!(q.is_unit(), "projecting a rotor off S³: {}", q);

    let denom = 1.0 - q.w;
    if denom.abs() <= pole_tolerance {
        return Err(RpsError::ProjectionPole { index: None, w: q.w });
    }

    Ok([q.x / denom, q.y / denom, q.z / denom])
}

/// Inverse stereographic lift R³ → S³
///
/// p ↦ (2p / (1 + |p|²), (|p|² − 1) / (|p|² + 1))
pub fn lift(p: &Point3) -> Result<Rotor4> {
    if let Some(c) = p.iter().copied().find(|c| !c.is_finite()) {
        return Err(RpsError::NonFiniteInput {
            what: "point coordinate",
            value: c,
        });
    }

    let s = vec3::dot(p, p);
    let scale = 2.0 / (1.0 + s);
    Ok(Rotor4::new(
        p[0] * scale,
        p[1] * scale,
        p[2] * scale,
        (s - 1.0) / (s + 1.0),
    ))
}

/// A rotor index together with its projected image
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub index: u32,
    pub rotor: Rotor4,
    pub point: Point3,
}

/// An index dropped from a batch because of a domain error
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExcludedIndex {
    pub index: u32,
    pub code: String,
    pub reason: String,
}

/// Result of projecting a list of indices
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectionBatch {
    pub points: Vec<ProjectedPoint>,
    pub excluded: Vec<ExcludedIndex>,
}

impl ProjectionBatch {
    /// Projected coordinates in index order
    pub fn coordinates(&self) -> Vec<Point3> {
        self.points.iter().map(|p| p.point).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }
}

/// Project `indices` drawn from `source`, in order.
///
/// Domain errors exclude the index and are reported in the batch. Any other
/// error (e.g. an index outside a bounded source) is returned.
pub fn project_indices<S: RotorSource + ?Sized>(
    source: &S,
    indices: &[u32],
    pole_tolerance: f64,
) -> Result<ProjectionBatch> {
    let mut batch = ProjectionBatch {
        points: Vec::with_capacity(indices.len()),
        excluded: Vec::new(),
    };

    for &n in indices {
        let projected = source
            .rotor(n)
            .and_then(|q| project_with_tolerance(&q, pole_tolerance).map(|p| (q, p)));

        match projected {
            Ok((rotor, point)) => batch.points.push(ProjectedPoint { index: n, rotor, point }),
            Err(err) if err.is_recoverable() => {
                let err = match err {
                    RpsError::ProjectionPole { w, .. } => RpsError::ProjectionPole { index: Some(n), w },
                    other => other,
                };
                tracing::warn!(source = source.name(), index = n, "excluding index: {}", err);
                batch.excluded.push(ExcludedIndex {
                    index: n,
                    code: err.error_code().to_string(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        source = source.name(),
        projected = batch.points.len(),
        excluded = batch.excluded.len(),
        "projected index batch"
    );

    Ok(batch)
}
