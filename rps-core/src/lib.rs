//! # RPS-Core
//!
//! Recursive Phase Solids: Platonic vertex sets from points on the 3-sphere.
//!
//! The pipeline is strictly layered:
//!
//! 1. **Rotor generator** ([`phase`]): step `n` has phase θₙ = π·2ⁿ and rotor
//!    qₙ = (cos θₙ, sin θₙ, cos 2θₙ, sin 2θₙ), normalized by 1/√2 onto S³.
//! 2. **Projector** ([`projection`]): stereographic projection
//!    (x, y, z, w) ↦ (x, y, z)/(1 − w), with the pole reported as an error.
//! 3. **Selector** ([`selector`]): curated index tables pick the rotors whose
//!    projections are the vertices of each Platonic solid. Tables are
//!    validated once, when the selector is built.
//!
//! Verification ([`verify`]) and export ([`export`]) consume the resulting
//! vertex arrays.
//!
//! ## Example
//!
//! ```rust
//! use rps_core::{PlatonicSolid, SolidSelector};
//!
//! let selector = SolidSelector::new().unwrap();
//! let tetra = selector.vertices(PlatonicSolid::Tetrahedron);
//! assert_eq!(tetra.len(), 4);
//!
//! let err = selector.vertices_by_name("sphere").unwrap_err();
//! assert!(err.to_string().contains("dodecahedron"));
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod export;
pub mod phase;
pub mod projection;
pub mod rotor;
pub mod selector;
pub mod solid;
pub mod source;
pub mod vec3;
pub mod verify;

// Re-exports for convenience
pub use catalogue::VertexCatalogue;
pub use config::SelectorConfig;
pub use error::{ErrorCategory, Result, RpsError};
pub use phase::{PhaseForm, PhaseRotor, PhaseSequence};
pub use projection::{lift, project, ProjectionBatch};
pub use rotor::Rotor4;
pub use selector::{SolidSelector, SolidVertices};
pub use solid::PlatonicSolid;
pub use source::RotorSource;
pub use vec3::Point3;
pub use verify::{full_verify, VerificationReport, VerifyOptions};

/// Golden ratio φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// 1/φ = φ − 1
pub const INV_PHI: f64 = PHI - 1.0;

/// Allowed deviation of ‖q̂‖ from 1
pub const UNIT_NORM_TOLERANCE: f64 = 1e-9;

/// |1 − w| at or below this is treated as the projection pole
pub const DEFAULT_POLE_TOLERANCE: f64 = 1e-12;

/// Relative tolerance for equal edge lengths
pub const DEFAULT_EDGE_TOLERANCE: f64 = 1e-6;

/// Projected points closer than this are the same vertex
pub const DEFAULT_COINCIDENCE_TOLERANCE: f64 = 1e-9;

/// Vertex coordinates of a solid by name, using the default selector
pub fn generate_platonic_solid(name: &str) -> Result<Vec<Point3>> {
    let solid: PlatonicSolid = name.parse()?;
    let selector = SolidSelector::new()?;
    Ok(selector.vertices(solid).to_vec())
}
