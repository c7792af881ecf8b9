//! # Fisherman Backend
//!
//! Execution-context capabilities and instance configuration.
//!
//! ## Gantree Architecture
//!
//! ```text
//! fisherman_backend // L1+L2: Backend description (완료)
//!     ExecutionContext // 능력 인터페이스 (완료)
//!         is_simulator(), noise_config(), backend_noise_model()
//!     QuantumInstance // 실행 인스턴스 (완료)
//!         BackendInfo, BackendOptions
//!     NoiseConfig // 노이즈 설정 (완료)
//!     NoiseModel // 노이즈 기술 (완료)
//!         ideal(), from_depol(), is_ideal()
//!     InstanceConfig // JSON 설정 (완료)
//!         from_json(), to_json(), from_file(), build()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fisherman_backend::prelude::*;
//!
//! let instance = QuantumInstance::new(BackendInfo::qasm_simulator(5).with_seed(42));
//! assert!(instance.is_simulator().unwrap());
//! assert!(instance.backend_noise_model().unwrap().is_none());
//! ```
//!
//! ## From JSON
//!
//! ```rust
//! use fisherman_backend::prelude::*;
//!
//! let config = InstanceConfig::from_json(
//!     r#"{"backend": "qasm_simulator", "num_qubits": 3, "noise_config": {"basis_gates": ["cx", "u3"]}}"#,
//! )
//! .unwrap();
//! let instance = config.build().unwrap();
//! assert_eq!(instance.noise_config().unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Capability trait (Gantree: L1_Backend → ExecutionContext)
pub mod context;

/// Backend descriptor and instance (Gantree: L1_Backend → QuantumInstance)
pub mod instance;

/// Attached noise settings (Gantree: L1_Backend → NoiseConfig)
pub mod noise_config;

/// Noise model description (Gantree: L1_Backend → NoiseModel)
pub mod noise_model;

/// JSON configuration (Gantree: L2_Integration → InstanceConfig)
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::InstanceConfig;
pub use context::ExecutionContext;
pub use instance::{BackendInfo, BackendOptions, QuantumInstance};
pub use noise_config::NoiseConfig;
pub use noise_model::NoiseModel;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use fisherman_backend::prelude::*;
    //! ```

    pub use crate::config::InstanceConfig;
    pub use crate::context::ExecutionContext;
    pub use crate::instance::{BackendInfo, BackendOptions, QuantumInstance};
    pub use crate::noise_config::NoiseConfig;
    pub use crate::noise_model::NoiseModel;
}

// ============================================================================
// Integration Tests
// ============================================================================
