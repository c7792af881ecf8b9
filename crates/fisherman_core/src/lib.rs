//! # Fisherman Core
//!
//! Error taxonomy, bitstrings, and triangular indexing shared by the
//! Fisherman crates.
//!
//! ## Gantree Architecture
//!
//! ```text
//! fisherman_core // L0: Foundation (완료)
//!     CoreTypes // Bitstring, TriangularIndex (완료)
//!     Constants // 실행/기저 상수 (완료)
//!     Errors // FishermanError (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fisherman_core::prelude::*;
//!
//! let bs = Bitstring::parse("0110").unwrap();
//! assert_eq!(bs.to_index(), 6);
//!
//! let idx = TriangularIndex::new(3).unwrap();
//! assert_eq!(idx.len(), 6);
//! assert_eq!(idx.offset(1, 2), Some(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{basis, execution};
pub use error::{FishermanError, FishermanResult};
pub use types::{Bitstring, TriangularIndex};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use fisherman_core::prelude::*;
    //! ```

    pub use crate::constants::{basis, execution};
    pub use crate::error::{FishermanError, FishermanResult};
    pub use crate::types::{Bitstring, TriangularIndex};
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
