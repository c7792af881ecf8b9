//! Execution context capabilities
//!
//! Gantree: L1_Backend → ExecutionContext
//!
//! The three read-only queries the exact-simulation check needs. Each
//! accessor is fallible so a context that cannot answer surfaces
//! `MissingCapability` instead of guessing.

use crate::noise_config::NoiseConfig;
use crate::noise_model::NoiseModel;
use fisherman_core::FishermanResult;

/// Capability interface over a quantum execution context
/// Gantree: ExecutionContext // 실행 컨텍스트 인터페이스
pub trait ExecutionContext {
    /// Whether execution runs on a simulator rather than hardware
    fn is_simulator(&self) -> FishermanResult<bool>;

    /// Noise configuration attached to the context
    fn noise_config(&self) -> FishermanResult<&NoiseConfig>;

    /// Noise model configured in the backend options, if any
    fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>>;
}

impl<C: ExecutionContext + ?Sized> ExecutionContext for &C {
    fn is_simulator(&self) -> FishermanResult<bool> {
        (**self).is_simulator()
    }

    fn noise_config(&self) -> FishermanResult<&NoiseConfig> {
        (**self).noise_config()
    }

    fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>> {
        (**self).backend_noise_model()
    }
}

impl<C: ExecutionContext + ?Sized> ExecutionContext for Box<C> {
    fn is_simulator(&self) -> FishermanResult<bool> {
        (**self).is_simulator()
    }

    fn noise_config(&self) -> FishermanResult<&NoiseConfig> {
        (**self).noise_config()
    }

    fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>> {
        (**self).backend_noise_model()
    }
}
