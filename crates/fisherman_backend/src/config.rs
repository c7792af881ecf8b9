//! Instance configuration
//!
//! Gantree: L2_Integration → InstanceConfig
//!
//! JSON description of a `QuantumInstance`, so notebooks can keep their
//! backend setup next to their data.

use crate::instance::{BackendInfo, BackendOptions, QuantumInstance};
use crate::noise_config::NoiseConfig;
use crate::noise_model::NoiseModel;
use fisherman_core::{execution, FishermanError, FishermanResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable description of a quantum instance
/// Gantree: InstanceConfig // 인스턴스 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    // ========================================================================
    // Backend
    // ========================================================================
    /// Backend name
    pub backend: String,

    /// Number of qubits
    pub num_qubits: usize,

    /// Simulator or hardware
    pub simulator: bool,

    // ========================================================================
    // Options
    // ========================================================================
    /// Shots per circuit
    pub shots: u64,

    /// Simulator seed
    pub seed: Option<u64>,

    /// Noise model in the backend options
    pub noise_model: Option<NoiseModel>,

    // ========================================================================
    // Noise Settings
    // ========================================================================
    /// Noise configuration attached to the instance
    pub noise_config: NoiseConfig,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            backend: execution::DEFAULT_BACKEND.to_string(),
            num_qubits: execution::DEFAULT_NUM_QUBITS,
            simulator: true,
            shots: execution::DEFAULT_SHOTS,
            seed: None,
            noise_model: None,
            noise_config: NoiseConfig::default(),
        }
    }
}

impl InstanceConfig {
    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> FishermanResult<()> {
        if self.num_qubits == 0 {
            return Err(FishermanError::InvalidConfig(
                "num_qubits must be at least 1".into(),
            ));
        }
        if self.shots == 0 {
            return Err(FishermanError::InvalidConfig("shots must be at least 1".into()));
        }
        if let Some(model) = &self.noise_model {
            model.validate()?;
        }
        Ok(())
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Build the described instance
    pub fn build(&self) -> FishermanResult<QuantumInstance> {
        self.validate()?;
        let backend = BackendInfo::new(&self.backend, self.num_qubits, self.simulator)
            .with_options(BackendOptions {
                shots: self.shots,
                seed_simulator: self.seed,
                noise_model: self.noise_model.clone(),
            });
        Ok(QuantumInstance::new(backend).with_noise_config(self.noise_config.clone()))
    }

    /// Describe an existing instance
    pub fn from_instance(instance: &QuantumInstance) -> Self {
        let backend = instance.backend();
        let options = backend.options();
        Self {
            backend: backend.name().to_string(),
            num_qubits: backend.num_qubits(),
            simulator: backend.is_simulator(),
            shots: options.shots,
            seed: options.seed_simulator,
            noise_model: options.noise_model.clone(),
            noise_config: instance.noise_settings().clone(),
        }
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Convert to JSON string
    pub fn to_json(&self) -> FishermanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> FishermanResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> FishermanResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!(
            "Loaded instance config from {} [{}]",
            path.display(),
            config.backend
        );
        Ok(config)
    }

    /// Write to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> FishermanResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::debug!("Wrote instance config to {}", path.display());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExecutionContext;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = InstanceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend, "statevector_simulator");
        assert!(config.simulator);

        let instance = config.build().unwrap();
        assert!(instance.is_simulator().unwrap());
        assert!(instance.noise_config().unwrap().is_empty());
        assert!(instance.backend_noise_model().unwrap().is_none());
    }

    #[test]
    fn test_validation() {
        let config = InstanceConfig {
            num_qubits: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FishermanError::InvalidConfig(_))
        ));

        let config = InstanceConfig {
            shots: 0,
            ..Default::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = InstanceConfig {
            backend: "qasm_simulator".into(),
            num_qubits: 5,
            seed: Some(7),
            noise_model: Some(NoiseModel::from_depol(0.01).unwrap()),
            noise_config: NoiseConfig::new().with("coupling_map", json!([[0, 1], [1, 2]])),
            ..Default::default()
        };

        let json = config.to_json().unwrap();
        let parsed = InstanceConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = InstanceConfig::from_json(r#"{"backend": "ibm_kyiv", "simulator": false}"#)
            .unwrap();
        assert_eq!(config.backend, "ibm_kyiv");
        assert!(!config.simulator);
        assert_eq!(config.shots, execution::DEFAULT_SHOTS);
        assert_eq!(config.num_qubits, execution::DEFAULT_NUM_QUBITS);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            InstanceConfig::from_json("{not json"),
            Err(FishermanError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_instance() {
        let instance = InstanceConfig {
            num_qubits: 3,
            seed: Some(11),
            ..Default::default()
        }
        .build()
        .unwrap();

        let config = InstanceConfig::from_instance(&instance);
        assert_eq!(config.build().unwrap(), instance);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "fisherman_instance_config_{}.json",
            std::process::id()
        ));
        let config = InstanceConfig {
            num_qubits: 2,
            ..Default::default()
        };

        config.to_file(&path).unwrap();
        let loaded = InstanceConfig::from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = InstanceConfig::from_file("/nonexistent/fisherman.json").unwrap_err();
        assert!(matches!(err, FishermanError::FileError(_)));
    }
}
