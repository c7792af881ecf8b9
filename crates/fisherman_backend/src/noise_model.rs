//! Noise model description
//!
//! Gantree: L1_Backend → NoiseModel
//!
//! A noise model attached to backend options. Fisherman never simulates
//! with it; its presence alone decides whether a run can be exact.

use fisherman_core::{FishermanError, FishermanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate and readout error rates attached to a backend
/// Gantree: NoiseModel // 노이즈 기술
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    /// Single-qubit gate error rate
    gate_error_1q: f64,

    /// Two-qubit gate error rate
    gate_error_2q: f64,

    /// Readout error rate
    readout_error: f64,

    /// Basis gates the model was built for
    #[serde(default)]
    basis_gates: Vec<String>,
}

impl NoiseModel {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new noise model with validation
    /// Gantree: new(e1,e2,ro) -> Result<Self> // 생성+검증
    pub fn new(gate_error_1q: f64, gate_error_2q: f64, readout_error: f64) -> FishermanResult<Self> {
        let model = Self {
            gate_error_1q,
            gate_error_2q,
            readout_error,
            basis_gates: Vec::new(),
        };
        model.validate()?;
        Ok(model)
    }

    /// Noise model with every rate at zero
    ///
    /// Still counts as an attached noise model.
    pub fn ideal() -> Self {
        Self {
            gate_error_1q: 0.0,
            gate_error_2q: 0.0,
            readout_error: 0.0,
            basis_gates: Vec::new(),
        }
    }

    /// Create from effective depolarizing error
    pub fn from_depol(p_depol: f64) -> FishermanResult<Self> {
        Self::new(p_depol, (p_depol * 10.0).min(1.0), p_depol / 4.0)
    }

    /// Set basis gates
    pub fn with_basis_gates<I, S>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basis_gates = gates.into_iter().map(Into::into).collect();
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate every rate lies in [0, 1]
    pub fn validate(&self) -> FishermanResult<()> {
        for rate in [self.gate_error_1q, self.gate_error_2q, self.readout_error] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(FishermanError::InvalidErrorRate(rate));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Single-qubit gate error
    #[inline]
    pub fn gate_error_1q(&self) -> f64 {
        self.gate_error_1q
    }

    /// Two-qubit gate error
    #[inline]
    pub fn gate_error_2q(&self) -> f64 {
        self.gate_error_2q
    }

    /// Readout error
    #[inline]
    pub fn readout_error(&self) -> f64 {
        self.readout_error
    }

    /// Basis gates
    pub fn basis_gates(&self) -> &[String] {
        &self.basis_gates
    }

    /// True when every error rate is zero
    pub fn is_ideal(&self) -> bool {
        self.gate_error_1q == 0.0 && self.gate_error_2q == 0.0 && self.readout_error == 0.0
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoiseModel(1q={:.2e}, 2q={:.2e}, ro={:.2e})",
            self.gate_error_1q, self.gate_error_2q, self.readout_error
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
