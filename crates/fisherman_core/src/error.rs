//! Error types for Fisherman
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every fault is local to the call that raised it. Nothing here is
//! retried; callers decide what to do with a failed query.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for Fisherman
/// Gantree: FishermanError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FishermanError {
    // ========================================================================
    // Shape / Argument Errors
    // ========================================================================
    /// Coefficient vector does not fill an n×n upper triangle
    /// Gantree: InvalidTriangularLength{{len,n,expected}} // 길이 불일치
    #[error("Invalid upper-triangular data: got {len} coefficients for n={n}, expected {expected}")]
    InvalidTriangularLength {
        len: usize,
        n: usize,
        expected: usize,
    },

    /// Element-wise comparison on sequences of different shape
    /// Gantree: ShapeMismatch{{left,right}} // 형상 불일치
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix is not square
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// n(n+1)/2 does not fit in usize
    #[error("Upper triangle of dimension {n} is too large to represent")]
    TriangleTooLarge { n: usize },

    /// 2^n rows cannot be addressed on this platform
    #[error("Basis for {n} qubits is too large to represent")]
    BasisTooLarge { n: usize },

    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Error rate outside [0, 1]
    #[error("Invalid error rate {0}: must be in range [0, 1]")]
    InvalidErrorRate(f64),

    // ========================================================================
    // Capability Errors
    // ========================================================================
    /// Execution context cannot answer a capability query
    /// Gantree: MissingCapability(String) // 능력 누락
    #[error("Execution context does not expose '{0}'")]
    MissingCapability(String),

    // ========================================================================
    // Configuration / I/O Errors
    // ========================================================================
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for Fisherman operations
/// Gantree: FishermanResult<T> // type alias
pub type FishermanResult<T> = Result<T, FishermanError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for FishermanError {
    fn from(err: serde_json::Error) -> Self {
        FishermanError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for FishermanError {
    fn from(err: std::io::Error) -> Self {
        FishermanError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl FishermanError {
    /// Shape mismatch for two flat sequences
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        FishermanError::ShapeMismatch {
            left: (left, 1),
            right: (right, 1),
        }
    }

    /// Check if error is an invalid-shape / invalid-argument error
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            FishermanError::InvalidTriangularLength { .. }
                | FishermanError::ShapeMismatch { .. }
                | FishermanError::NotSquare { .. }
                | FishermanError::TriangleTooLarge { .. }
                | FishermanError::BasisTooLarge { .. }
        )
    }

    /// Check if error came from a context missing a capability
    pub fn is_capability_error(&self) -> bool {
        matches!(self, FishermanError::MissingCapability(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
