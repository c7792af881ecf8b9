//! # Fisherman Utils
//!
//! Numeric helpers for quantum experiment notebooks.
//!
//! ## Gantree Architecture
//!
//! ```text
//! fisherman_utils // L3: Utils (완료)
//!     ExactSimulation // 정확 시뮬레이션 판정 (완료)
//!         is_exact_simulation(), exact_simulation_report()
//!     SymmetricMatrix // 상삼각→대칭 행렬 (완료)
//!         sym_from_triu(), sym_from_triu_auto(), triu_from_sym()
//!     StatevectorBasis // 기저 테이블 (완료)
//!         statevector_basis(), basis_states(), row_to_index()
//!     HammingDistance // 해밍 거리 (완료)
//!         hamming_distance(), hamming_distance_matrix(), bitstring_distance()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fisherman_utils::prelude::*;
//! use fisherman_backend::{BackendInfo, QuantumInstance};
//!
//! let instance = QuantumInstance::new(BackendInfo::statevector_simulator(3));
//! assert!(is_exact_simulation(&instance).unwrap());
//!
//! let sym = sym_from_triu(&[1.0, 2.0, 3.0], 2).unwrap();
//! assert_eq!(sym[(1, 0)], 2.0);
//!
//! let basis = statevector_basis(2).unwrap();
//! assert_eq!(basis.shape(), (4, 2));
//!
//! assert_eq!(hamming_distance(&[0, 1, 1, 0], &[1, 1, 0, 0]).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Exact-simulation check (Gantree: L3_Utils → ExactSimulation)
pub mod simulation;

/// Symmetric reconstruction (Gantree: L3_Utils → SymmetricMatrix)
pub mod matrix;

/// Basis tables (Gantree: L3_Utils → StatevectorBasis)
pub mod basis;

/// Hamming distance (Gantree: L3_Utils → HammingDistance)
pub mod distance;

// ============================================================================
// Re-exports
// ============================================================================

pub use basis::{basis_states, row_to_index, statevector_basis};
pub use distance::{bitstring_distance, hamming_distance, hamming_distance_matrix};
pub use matrix::{sym_from_triu, sym_from_triu_auto, triu_dimension, triu_from_sym, triu_len};
pub use simulation::{exact_simulation_report, is_exact_simulation, ExactSimulationReport};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use fisherman_utils::prelude::*;
    //! ```

    pub use crate::basis::{basis_states, row_to_index, statevector_basis};
    pub use crate::distance::{bitstring_distance, hamming_distance, hamming_distance_matrix};
    pub use crate::matrix::{
        sym_from_triu, sym_from_triu_auto, triu_dimension, triu_from_sym, triu_len,
    };
    pub use crate::simulation::{
        exact_simulation_report, is_exact_simulation, ExactSimulationReport,
    };
    pub use fisherman_core::{Bitstring, FishermanError, FishermanResult};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================


// ============================================================================
// Property Tests
// ============================================================================
