//! Quantum instance: backend descriptor plus run settings
//!
//! Gantree: L1_Backend → QuantumInstance
//!
//! Describes where circuits would run. Nothing here executes anything.

use crate::context::ExecutionContext;
use crate::noise_config::NoiseConfig;
use crate::noise_model::NoiseModel;
use fisherman_core::{execution, FishermanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BackendOptions
// ============================================================================

/// Options configured on a backend
/// Gantree: BackendOptions // 백엔드 옵션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendOptions {
    /// Shots per circuit
    pub shots: u64,

    /// Simulator seed
    pub seed_simulator: Option<u64>,

    /// Noise model used by the simulator
    pub noise_model: Option<NoiseModel>,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            shots: execution::DEFAULT_SHOTS,
            seed_simulator: None,
            noise_model: None,
        }
    }
}

// ============================================================================
// BackendInfo
// ============================================================================

/// Backend descriptor
/// Gantree: BackendInfo // 백엔드 기술
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend name
    name: String,

    /// Number of qubits
    num_qubits: usize,

    /// Simulator or hardware
    simulator: bool,

    /// Configured options
    options: BackendOptions,
}

impl BackendInfo {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a backend descriptor
    pub fn new(name: &str, num_qubits: usize, simulator: bool) -> Self {
        Self {
            name: name.to_string(),
            num_qubits,
            simulator,
            options: BackendOptions::default(),
        }
    }

    /// Statevector simulator
    pub fn statevector_simulator(num_qubits: usize) -> Self {
        Self::new("statevector_simulator", num_qubits, true)
    }

    /// Shot-based simulator
    pub fn qasm_simulator(num_qubits: usize) -> Self {
        Self::new("qasm_simulator", num_qubits, true)
    }

    /// Hardware device
    pub fn hardware(name: &str, num_qubits: usize) -> Self {
        Self::new(name, num_qubits, false)
    }

    /// Attach a noise model to the options
    pub fn with_noise_model(mut self, model: NoiseModel) -> Self {
        self.options.noise_model = Some(model);
        self
    }

    /// Set simulator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed_simulator = Some(seed);
        self
    }

    /// Set shots
    pub fn with_shots(mut self, shots: u64) -> Self {
        self.options.shots = shots;
        self
    }

    /// Replace all options
    pub fn with_options(mut self, options: BackendOptions) -> Self {
        self.options = options;
        self
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Backend name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Simulator or hardware
    pub fn is_simulator(&self) -> bool {
        self.simulator
    }

    /// Configured options
    pub fn options(&self) -> &BackendOptions {
        &self.options
    }
}

// ============================================================================
// QuantumInstance
// ============================================================================

/// Backend plus the noise settings a run is configured with
/// Gantree: QuantumInstance // 실행 인스턴스
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumInstance {
    backend: BackendInfo,
    noise_config: NoiseConfig,
}

impl QuantumInstance {
    /// Create from a backend with empty noise configuration
    pub fn new(backend: BackendInfo) -> Self {
        Self {
            backend,
            noise_config: NoiseConfig::default(),
        }
    }

    /// Set noise configuration
    pub fn with_noise_config(mut self, noise_config: NoiseConfig) -> Self {
        self.noise_config = noise_config;
        self
    }

    /// Backend descriptor
    pub fn backend(&self) -> &BackendInfo {
        &self.backend
    }

    /// Attached noise configuration
    pub fn noise_settings(&self) -> &NoiseConfig {
        &self.noise_config
    }

    /// Mutable noise configuration
    pub fn noise_config_mut(&mut self) -> &mut NoiseConfig {
        &mut self.noise_config
    }
}

impl ExecutionContext for QuantumInstance {
    fn is_simulator(&self) -> FishermanResult<bool> {
        Ok(self.backend.is_simulator())
    }

    fn noise_config(&self) -> FishermanResult<&NoiseConfig> {
        Ok(&self.noise_config)
    }

    fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>> {
        Ok(self.backend.options().noise_model.as_ref())
    }
}

impl fmt::Display for QuantumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QuantumInstance(backend={}, qubits={}, simulator={}, shots={}, noise_config={})",
            self.backend.name,
            self.backend.num_qubits,
            self.backend.simulator,
            self.backend.options.shots,
            self.noise_config.len()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(BackendInfo::statevector_simulator(5).is_simulator());
        assert!(BackendInfo::qasm_simulator(5).is_simulator());
        let hw = BackendInfo::hardware("ibm_brisbane", 127);
        assert!(!hw.is_simulator());
        assert_eq!(hw.name(), "ibm_brisbane");
        assert_eq!(hw.num_qubits(), 127);
    }

    #[test]
    fn test_default_options() {
        let backend = BackendInfo::qasm_simulator(2);
        assert_eq!(backend.options().shots, execution::DEFAULT_SHOTS);
        assert!(backend.options().seed_simulator.is_none());
        assert!(backend.options().noise_model.is_none());
    }

    #[test]
    fn test_builder() {
        let backend = BackendInfo::qasm_simulator(3)
            .with_shots(8192)
            .with_seed(42)
            .with_noise_model(NoiseModel::ideal());

        assert_eq!(backend.options().shots, 8192);
        assert_eq!(backend.options().seed_simulator, Some(42));
        assert!(backend.options().noise_model.is_some());
    }

    #[test]
    fn test_instance_capabilities() {
        let mut instance = QuantumInstance::new(BackendInfo::statevector_simulator(2));
        assert!(instance.is_simulator().unwrap());
        assert!(instance.noise_config().unwrap().is_empty());
        assert!(instance.backend_noise_model().unwrap().is_none());

        instance.noise_config_mut().insert("basis_gates", vec!["cx", "u3"]);
        assert_eq!(instance.noise_config().unwrap().len(), 1);
    }

    #[test]
    fn test_display() {
        let instance = QuantumInstance::new(BackendInfo::qasm_simulator(4));
        let s = instance.to_string();
        assert!(s.contains("qasm_simulator"));
        assert!(s.contains("qubits=4"));
    }
}
