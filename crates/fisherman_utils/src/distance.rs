//! Hamming distance
//!
//! Gantree: L3_Utils → HammingDistance

use fisherman_core::{Bitstring, FishermanError, FishermanResult};
use nalgebra::{DMatrix, Scalar};

/// Number of positions where `x` and `y` differ
/// Gantree: hamming_distance(x,y) -> Result<usize> // 해밍 거리
///
/// Lengths must match; a mismatch is reported before any element is
/// compared.
pub fn hamming_distance<T: PartialEq>(x: &[T], y: &[T]) -> FishermanResult<usize> {
    if x.len() != y.len() {
        return Err(FishermanError::length_mismatch(x.len(), y.len()));
    }
    Ok(x.iter().zip(y).filter(|(a, b)| a != b).count())
}

/// Hamming distance between two grids of the same shape
pub fn hamming_distance_matrix<T>(x: &DMatrix<T>, y: &DMatrix<T>) -> FishermanResult<usize>
where
    T: Scalar,
{
    if x.shape() != y.shape() {
        return Err(FishermanError::ShapeMismatch {
            left: x.shape(),
            right: y.shape(),
        });
    }
    Ok(x.iter().zip(y.iter()).filter(|(a, b)| a != b).count())
}

/// Hamming distance between two bitstrings of equal width
pub fn bitstring_distance(a: &Bitstring, b: &Bitstring) -> FishermanResult<usize> {
    hamming_distance(a.as_slice(), b.as_slice())
}

// ============================================================================
// Tests
// ============================================================================
