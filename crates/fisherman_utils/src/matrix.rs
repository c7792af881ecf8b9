//! Symmetric matrices from upper-triangular data
//!
//! Gantree: L3_Utils → SymmetricMatrix
//!
//! Coefficients are stored row by row over the upper triangle, diagonal
//! included: (0,0), (0,1), ..., (0,n-1), (1,1), ..., (n-1,n-1).

use fisherman_core::{FishermanError, FishermanResult, TriangularIndex};
use nalgebra::DMatrix;

/// Number of coefficients in an n×n upper triangle, n(n+1)/2
pub fn triu_len(n: usize) -> FishermanResult<usize> {
    Ok(TriangularIndex::new(n)?.len())
}

/// Dimension n whose upper triangle holds exactly `len` coefficients
pub fn triu_dimension(len: usize) -> FishermanResult<usize> {
    Ok(TriangularIndex::from_len(len)?.dim())
}

/// Build the n×n symmetric matrix whose upper triangle is `x`
/// Gantree: sym_from_triu(x,n) -> Result<DMatrix> // 대칭 행렬 복원
///
/// `x.len()` must equal n(n+1)/2; anything else is rejected rather than
/// truncated or padded.
pub fn sym_from_triu(x: &[f64], n: usize) -> FishermanResult<DMatrix<f64>> {
    let index = TriangularIndex::new(n)?;
    if x.len() != index.len() {
        return Err(FishermanError::InvalidTriangularLength {
            len: x.len(),
            n,
            expected: index.len(),
        });
    }

    let mut sym = DMatrix::zeros(n, n);
    for ((i, j), &value) in index.iter().zip(x) {
        sym[(i, j)] = value;
    }
    // Lower triangle is still zero, so mirroring equals adding the
    // transpose of the strictly-upper part
    sym.fill_lower_triangle_with_upper_triangle();
    Ok(sym)
}

/// Like [`sym_from_triu`], inferring n from the coefficient count
pub fn sym_from_triu_auto(x: &[f64]) -> FishermanResult<DMatrix<f64>> {
    sym_from_triu(x, triu_dimension(x.len())?)
}

/// Upper-triangular coefficients of a square matrix, row-major
///
/// Inverse of [`sym_from_triu`]. The lower triangle is ignored.
pub fn triu_from_sym(m: &DMatrix<f64>) -> FishermanResult<Vec<f64>> {
    if !m.is_square() {
        return Err(FishermanError::NotSquare {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    let index = TriangularIndex::new(m.nrows())?;
    Ok(index.iter().map(|(i, j)| m[(i, j)]).collect())
}

// ============================================================================
// Tests
// ============================================================================
