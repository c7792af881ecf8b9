//! Computational basis tables
//!
//! Gantree: L3_Utils → StatevectorBasis
//!
//! Every n-bit string, one per row. Row k holds the binary expansion of k
//! with bit 0 (value 2^0) in column 0.

use fisherman_core::basis::{basis_rows, LARGE_BASIS_WARN_QUBITS};
use fisherman_core::{Bitstring, FishermanError, FishermanResult};
use nalgebra::DMatrix;

/// 2^n × n table of 0/1 entries, row k encoding k
/// Gantree: statevector_basis(n) -> Result<DMatrix<u8>> // 기저 테이블
///
/// n = 0 gives one row with zero columns. Memory grows as n·2^n; bounding n
/// is the caller's job. Only a table whose byte size cannot be addressed at
/// all is rejected.
pub fn statevector_basis(n: usize) -> FishermanResult<DMatrix<u8>> {
    let rows = checked_rows(n, n)?;
    Ok(DMatrix::from_fn(rows, n, |k, i| ((k >> i) & 1) as u8))
}

/// Same enumeration as [`statevector_basis`], as bitstrings
pub fn basis_states(n: usize) -> FishermanResult<Vec<Bitstring>> {
    let row_bytes = std::mem::size_of::<Bitstring>().saturating_add(n);
    let rows = checked_rows(n, row_bytes)?;
    Ok((0..rows).map(|k| Bitstring::from_index(k, n)).collect())
}

/// Integer encoded by a basis row: Σ row[i]·2^i
///
/// Columns beyond the width of `usize` are ignored.
pub fn row_to_index(row: &[u8]) -> usize {
    row.iter()
        .enumerate()
        .filter(|(_, &bit)| bit != 0)
        .filter_map(|(i, _)| u32::try_from(i).ok().and_then(|s| 1usize.checked_shl(s)))
        .sum()
}

/// Row count for n qubits, provided `rows * row_bytes` fits an allocation
fn checked_rows(n: usize, row_bytes: usize) -> FishermanResult<usize> {
    let rows = basis_rows(n)
        .filter(|rows| {
            rows.checked_mul(row_bytes)
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(FishermanError::BasisTooLarge { n })?;
    if n > LARGE_BASIS_WARN_QUBITS {
        log::warn!("Building statevector basis for {} qubits ({} rows)", n, rows);
    }
    Ok(rows)
}

// ============================================================================
// Tests
// ============================================================================
