//! Constants for Fisherman
//!
//! Gantree: L0_Foundation → Constants

// ============================================================================
// Execution Defaults
// Gantree: execution // 실행 기본값
// ============================================================================

pub mod execution {
    //! Defaults for describing an execution context

    /// Default backend name
    pub const DEFAULT_BACKEND: &str = "statevector_simulator";

    /// Default shots per circuit
    /// Gantree: DEFAULT_SHOTS: u64 = 1024
    pub const DEFAULT_SHOTS: u64 = 1024;

    /// Default number of qubits described by a config
    pub const DEFAULT_NUM_QUBITS: usize = 1;
}

// ============================================================================
// Basis Limits
// Gantree: basis // 기저 상수
// ============================================================================

pub mod basis {
    //! Statevector basis sizing

    /// Qubit count above which basis generation logs a memory warning
    /// Gantree: LARGE_BASIS_WARN_QUBITS: usize = 20
    pub const LARGE_BASIS_WARN_QUBITS: usize = 20;

    /// Number of basis rows for `n` qubits, if representable
    #[inline]
    pub fn basis_rows(n: usize) -> Option<usize> {
        u32::try_from(n).ok().and_then(|s| 1usize.checked_shl(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_rows() {
        assert_eq!(basis::basis_rows(0), Some(1));
        assert_eq!(basis::basis_rows(3), Some(8));
        assert_eq!(basis::basis_rows(usize::BITS as usize), None);
    }
}
