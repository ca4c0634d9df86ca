//! Selector configuration

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_COINCIDENCE_TOLERANCE, DEFAULT_EDGE_TOLERANCE, DEFAULT_POLE_TOLERANCE};

/// Environment variable overriding [`SelectorConfig::edge_tolerance`]
pub const ENV_EDGE_TOLERANCE: &str = "RPS_EDGE_TOLERANCE";
/// Environment variable overriding [`SelectorConfig::pole_tolerance`]
pub const ENV_POLE_TOLERANCE: &str = "RPS_POLE_TOLERANCE";
/// Environment variable overriding [`SelectorConfig::coincidence_tolerance`]
pub const ENV_COINCIDENCE_TOLERANCE: &str = "RPS_COINCIDENCE_TOLERANCE";

/// Tolerances used while building and validating vertex tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Relative tolerance for equal edge lengths
    pub edge_tolerance: f64,
    /// |1 − w| at or below this counts as the projection pole
    pub pole_tolerance: f64,
    /// Points closer than this are coincident
    pub coincidence_tolerance: f64,
}

impl SelectorConfig {
    /// Create a new configuration builder
    pub fn builder() -> SelectorConfigBuilder {
        SelectorConfigBuilder::default()
    }

    /// Defaults overridden by `RPS_*` environment variables.
    ///
    /// Unparsable or non-positive values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::builder()
            .edge_tolerance_opt(env_tolerance(ENV_EDGE_TOLERANCE))
            .pole_tolerance_opt(env_tolerance(ENV_POLE_TOLERANCE))
            .coincidence_tolerance_opt(env_tolerance(ENV_COINCIDENCE_TOLERANCE))
            .build()
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            pole_tolerance: DEFAULT_POLE_TOLERANCE,
            coincidence_tolerance: DEFAULT_COINCIDENCE_TOLERANCE,
        }
    }
}

fn env_tolerance(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    parse_tolerance(key, &raw)
}

/// Tolerances must be finite and strictly positive
pub fn is_valid_tolerance(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn parse_tolerance(key: &str, raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if is_valid_tolerance(v) => Some(v),
        _ => {
            tracing::warn!("Ignoring {}={:?}: expected a positive number", key, raw);
            None
        }
    }
}

/// Builder for SelectorConfig
#[derive(Debug, Default)]
pub struct SelectorConfigBuilder {
    edge_tolerance: Option<f64>,
    pole_tolerance: Option<f64>,
    coincidence_tolerance: Option<f64>,
}

impl SelectorConfigBuilder {
    /// Set the relative edge-length tolerance
    pub fn edge_tolerance(mut self, tolerance: f64) -> Self {
        self.edge_tolerance = Some(tolerance);
        self
    }

    /// Set the pole tolerance
    pub fn pole_tolerance(mut self, tolerance: f64) -> Self {
        self.pole_tolerance = Some(tolerance);
        self
    }

    /// Set the coincidence tolerance
    pub fn coincidence_tolerance(mut self, tolerance: f64) -> Self {
        self.coincidence_tolerance = Some(tolerance);
        self
    }

    fn edge_tolerance_opt(mut self, tolerance: Option<f64>) -> Self {
        self.edge_tolerance = tolerance.or(self.edge_tolerance);
        self
    }

    fn pole_tolerance_opt(mut self, tolerance: Option<f64>) -> Self {
        self.pole_tolerance = tolerance.or(self.pole_tolerance);
        self
    }

    fn coincidence_tolerance_opt(mut self, tolerance: Option<f64>) -> Self {
        self.coincidence_tolerance = tolerance.or(self.coincidence_tolerance);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SelectorConfig {
        let defaults = SelectorConfig::default();
        SelectorConfig {
            edge_tolerance: self.edge_tolerance.unwrap_or(defaults.edge_tolerance),
            pole_tolerance: self.pole_tolerance.unwrap_or(defaults.pole_tolerance),
            coincidence_tolerance: self
                .coincidence_tolerance
                .unwrap_or(defaults.coincidence_tolerance),
        }
    }
}
