//! Recursive phase rotor generator.
//!
//! Step `n` uses the phase θₙ = π·2ⁿ. The angle is never formed directly:
//! θₙ mod 2π equals π·(2ⁿ mod 2), and 2ⁿ mod 2 is computed by modular
//! exponentiation, so large `n` costs no precision.
//!
//! Every phase θ gives a raw rotor with two cos/sin pairs, so ‖q‖² = 2 and
//! q̂ = q/√2 lies on S³.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI, TAU};

use crate::error::{Result, RpsError};
use crate::rotor::Rotor4;
use crate::source::RotorSource;

/// Layout of the second cos/sin pair of a phase rotor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseForm {
    /// (cos θ, sin θ, cos 2θ, sin 2θ)
    #[default]
    DoubleAngle,
    /// (cos θ, sin θ, cos θ, −sin θ): e^{iθ} paired with its conjugate
    ConjugatePair,
}

impl PhaseForm {
    /// Raw rotor for an already reduced phase
    pub fn raw_at(&self, theta: f64) -> Rotor4 {
        let (sin, cos) = theta.sin_cos();
        match self {
            PhaseForm::DoubleAngle => {
                let (sin2, cos2) = (2.0 * theta).sin_cos();
                Rotor4::new(cos, sin, cos2, sin2)
            }
            PhaseForm::ConjugatePair => Rotor4::new(cos, sin, cos, -sin),
        }
    }

    /// Raw rotor qₙ
    pub fn raw_rotor(&self, n: u32) -> Rotor4 {
        self.raw_at(reduced_phase(n))
    }

    /// Normalized rotor q̂ₙ = qₙ/√2
    pub fn rotor(&self, n: u32) -> Rotor4 {
        let q = self.raw_rotor(n) * FRAC_1_SQRT_2;
        debug_assert!(q.is_unit(), "phase rotor {} off S³: {}", n, q);
        q
    }
}

impl std::fmt::Display for PhaseForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseForm::DoubleAngle => write!(f, "double-angle"),
            PhaseForm::ConjugatePair => write!(f, "conjugate-pair"),
        }
    }
}

/// 2ⁿ mod `modulus` by square-and-multiply
pub fn pow2_mod(n: u32, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }

    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut base: u128 = 2 % m;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    result as u64
}

/// θₙ mod 2π = π·(2ⁿ mod 2)
pub fn reduced_phase(n: u32) -> f64 {
    PI * pow2_mod(n, 2) as f64
}

/// Raw rotor qₙ in the default form
pub fn raw_rotor(n: u32) -> Rotor4 {
    PhaseForm::default().raw_rotor(n)
}

/// Normalized rotor q̂ₙ in the default form
pub fn rotor(n: u32) -> Rotor4 {
    PhaseForm::default().rotor(n)
}

/// Normalized rotor for an arbitrary real phase
pub fn rotor_at_phase(theta: f64, form: PhaseForm) -> Result<Rotor4> {
    if !theta.is_finite() {
        return Err(RpsError::NonFiniteInput {
            what: "phase",
            value: theta,
        });
    }
    Ok(form.raw_at(theta.rem_euclid(TAU)) * FRAC_1_SQRT_2)
}

/// One evaluated step of the sequence
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseRotor {
    /// Recursion index n
    pub index: u32,
    /// θₙ reduced into [0, 2π)
    pub phase: f64,
    /// qₙ
    pub raw: Rotor4,
    /// q̂ₙ
    pub unit: Rotor4,
}

/// The sequence n ↦ q̂ₙ as a rotor source
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseSequence {
    form: PhaseForm,
}

impl PhaseSequence {
    pub fn new(form: PhaseForm) -> Self {
        Self { form }
    }

    /// Full evaluation of step `n`
    pub fn evaluate(&self, n: u32) -> PhaseRotor {
        PhaseRotor {
            index: n,
            phase: reduced_phase(n),
            raw: self.form.raw_rotor(n),
            unit: self.form.rotor(n),
        }
    }

    /// First index of each distinct rotor among `0..limit`
    pub fn distinct_rotors(&self, limit: u32, epsilon: f64) -> Vec<PhaseRotor> {
        let mut distinct: Vec<PhaseRotor> = Vec::new();
        for n in 0..limit {
            let step = self.evaluate(n);
            if !distinct.iter().any(|d| d.unit.approx_eq(&step.unit, epsilon)) {
                distinct.push(step);
            }
        }
        distinct
    }
}

impl RotorSource for PhaseSequence {
    fn name(&self) -> &str {
        match self.form {
            PhaseForm::DoubleAngle => "phase-sequence/double-angle",
            PhaseForm::ConjugatePair => "phase-sequence/conjugate-pair",
        }
    }

    fn rotor(&self, n: u32) -> Result<Rotor4> {
        Ok(self.form.rotor(n))
    }

    fn len(&self) -> Option<usize> {
        None
    }
}
