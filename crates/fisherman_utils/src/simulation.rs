//! Exact-simulation check
//!
//! Gantree: L3_Utils → ExactSimulation
//!
//! A context runs an exact simulation when it is a simulator, carries no
//! noise configuration, and has no noise model in its backend options.

use fisherman_backend::ExecutionContext;
use fisherman_core::FishermanResult;

/// Individual verdicts behind the exact-simulation check
/// Gantree: ExactSimulationReport // 판정 내역
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSimulationReport {
    /// Context is a simulator
    pub simulator: bool,

    /// Attached noise configuration is empty
    pub noise_config_empty: bool,

    /// Backend options carry no noise model
    pub noise_model_absent: bool,
}

impl ExactSimulationReport {
    /// All three conditions hold
    pub fn is_exact(&self) -> bool {
        self.simulator && self.noise_config_empty && self.noise_model_absent
    }
}

/// Read the three capabilities of `ctx`
///
/// Any fault raised by the context is returned unchanged.
pub fn exact_simulation_report<C>(ctx: &C) -> FishermanResult<ExactSimulationReport>
where
    C: ExecutionContext + ?Sized,
{
    let report = ExactSimulationReport {
        simulator: ctx.is_simulator()?,
        noise_config_empty: ctx.noise_config()?.is_empty(),
        noise_model_absent: ctx.backend_noise_model()?.is_none(),
    };

    if !report.is_exact() {
        log::debug!(
            "Not an exact simulation: simulator={}, noise_config_empty={}, noise_model_absent={}",
            report.simulator,
            report.noise_config_empty,
            report.noise_model_absent
        );
    }

    Ok(report)
}

/// Whether `ctx` performs a noiseless exact simulation
/// Gantree: is_exact_simulation(ctx) -> Result<bool> // 정확 시뮬레이션 판정
pub fn is_exact_simulation<C>(ctx: &C) -> FishermanResult<bool>
where
    C: ExecutionContext + ?Sized,
{
    Ok(exact_simulation_report(ctx)?.is_exact())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fisherman_backend::{NoiseConfig, NoiseModel};
    use fisherman_core::FishermanError;

    /// Stub context with directly settable capabilities
    struct StubContext {
        simulator: bool,
        noise_config: NoiseConfig,
        noise_model: Option<NoiseModel>,
    }

    impl StubContext {
        fn exact() -> Self {
            Self {
                simulator: true,
                noise_config: NoiseConfig::new(),
                noise_model: None,
            }
        }
    }

    impl ExecutionContext for StubContext {
        fn is_simulator(&self) -> FishermanResult<bool> {
            Ok(self.simulator)
        }

        fn noise_config(&self) -> FishermanResult<&NoiseConfig> {
            Ok(&self.noise_config)
        }

        fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>> {
            Ok(self.noise_model.as_ref())
        }
    }

    /// Context that cannot report which backend it targets
    struct NoBackendContext;

    impl ExecutionContext for NoBackendContext {
        fn is_simulator(&self) -> FishermanResult<bool> {
            Ok(true)
        }

        fn noise_config(&self) -> FishermanResult<&NoiseConfig> {
            Err(FishermanError::MissingCapability("noise_config".into()))
        }

        fn backend_noise_model(&self) -> FishermanResult<Option<&NoiseModel>> {
            Err(FishermanError::MissingCapability("backend.options.noise_model".into()))
        }
    }

    #[test]
    fn test_exact_stub() {
        assert!(is_exact_simulation(&StubContext::exact()).unwrap());
    }

    #[test]
    fn test_hardware_is_not_exact() {
        let ctx = StubContext {
            simulator: false,
            ..StubContext::exact()
        };
        assert!(!is_exact_simulation(&ctx).unwrap());
    }

    #[test]
    fn test_noise_config_is_not_exact() {
        let ctx = StubContext {
            noise_config: NoiseConfig::new().with("basis_gates", vec!["cx", "u3"]),
            ..StubContext::exact()
        };
        assert!(!is_exact_simulation(&ctx).unwrap());
    }

    #[test]
    fn test_noise_model_is_not_exact() {
        // An all-zero model still counts as attached
        let ctx = StubContext {
            noise_model: Some(NoiseModel::ideal()),
            ..StubContext::exact()
        };
        assert!(!is_exact_simulation(&ctx).unwrap());
    }

    #[test]
    fn test_report_fields() {
        let ctx = StubContext {
            simulator: false,
            noise_model: Some(NoiseModel::from_depol(0.01).unwrap()),
            ..StubContext::exact()
        };
        let report = exact_simulation_report(&ctx).unwrap();
        assert_eq!(
            report,
            ExactSimulationReport {
                simulator: false,
                noise_config_empty: true,
                noise_model_absent: false,
            }
        );
        assert!(!report.is_exact());
    }

    #[test]
    fn test_missing_capability_propagates() {
        let err = is_exact_simulation(&NoBackendContext).unwrap_err();
        assert_eq!(err, FishermanError::MissingCapability("noise_config".into()));
    }

    #[test]
    fn test_dyn_context() {
        let ctx: Box<dyn ExecutionContext> = Box::new(StubContext::exact());
        assert!(is_exact_simulation(ctx.as_ref()).unwrap());
        assert!(is_exact_simulation(&ctx).unwrap());
    }
}
