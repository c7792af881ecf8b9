//! Core types for Fisherman
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Bitstrings in computational-basis order and the row-major
//! upper-triangle enumeration shared by the matrix helpers.

use crate::error::{FishermanError, FishermanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Bitstring
// ============================================================================

/// Bitstring over n qubits
/// Gantree: Bitstring // 비트열 타입
///
/// Bit 0 is qubit 0, the least-significant bit. The text form is written
/// most-significant first, so `"0110"` has qubit 0 on the right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from a vector of bools (index 0 = qubit 0)
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create from text (e.g., "0110", qubit 0 rightmost)
    /// Gantree: parse(s) -> Self // 파싱
    pub fn parse(s: &str) -> FishermanResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .rev()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(FishermanError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Binary expansion of `value` truncated to `n` bits
    /// Gantree: from_index(k,n) -> Self // 정수→비트열
    pub fn from_index(value: usize, n: usize) -> Self {
        let bits = (0..n)
            .map(|i| {
                u32::try_from(i)
                    .ok()
                    .and_then(|shift| value.checked_shr(shift))
                    .map_or(false, |v| v & 1 == 1)
            })
            .collect();
        Self { bits }
    }

    /// Create zero bitstring of given length
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count number of 1s (Hamming weight)
    /// Gantree: popcount() -> usize // 1 카운트
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Get bit at index (LSB = index 0)
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Bits in qubit order
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Integer encoded by the bits: Σ bit[i]·2^i
    ///
    /// Bits beyond the width of `usize` are ignored.
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .filter_map(|(i, _)| u32::try_from(i).ok().and_then(|s| 1usize.checked_shl(s)))
            .sum()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter().rev() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstring {
    type Err = FishermanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// TriangularIndex
// ============================================================================

/// Row-major enumeration of the upper triangle (diagonal included) of an
/// n×n matrix
/// Gantree: TriangularIndex // 상삼각 인덱스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangularIndex {
    n: usize,
    len: usize,
}

impl TriangularIndex {
    /// Index for dimension `n`
    pub fn new(n: usize) -> FishermanResult<Self> {
        // Halve the even factor first so n(n+1)/2 never overflows early
        let len = n
            .checked_add(1)
            .and_then(|m| {
                if n % 2 == 0 {
                    (n / 2).checked_mul(m)
                } else {
                    n.checked_mul(m / 2)
                }
            })
            .ok_or(FishermanError::TriangleTooLarge { n })?;
        Ok(Self { n, len })
    }

    /// Recover the dimension from a coefficient count
    ///
    /// Fails unless `len == n(n+1)/2` for some n. When the next triangle
    /// past `len` is not representable, the error names the largest one
    /// below it.
    pub fn from_len(len: usize) -> FishermanResult<Self> {
        let estimate = ((len as f64 * 8.0 + 1.0).sqrt() - 1.0) / 2.0;
        let mut n = estimate as usize;
        while n > 0 && Self::new(n).map_or(true, |t| t.len > len) {
            n -= 1;
        }
        loop {
            let tri = match Self::new(n) {
                Ok(index) => index.len,
                Err(_) => {
                    let below = n.saturating_sub(1);
                    return Err(FishermanError::InvalidTriangularLength {
                        len,
                        n: below,
                        expected: Self::new(below)?.len,
                    });
                }
            };
            if tri == len {
                return Ok(Self { n, len });
            }
            if tri > len {
                return Err(FishermanError::InvalidTriangularLength {
                    len,
                    n,
                    expected: tri,
                });
            }
            n += 1;
        }
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Number of upper-triangle entries, n(n+1)/2
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the 0×0 matrix
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Linear position of entry (i, j), j ≥ i
    ///
    /// Equals i·n − i(i−1)/2 + (j−i).
    pub fn offset(&self, i: usize, j: usize) -> Option<usize> {
        if i > j || j >= self.n {
            return None;
        }
        Some(i * (2 * self.n - i + 1) / 2 + (j - i))
    }

    /// (row, col) pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        (0..n).flat_map(move |i| (i..n).map(move |j| (i, j)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstring_parse_is_msb_first() {
        let bs = Bitstring::parse("0110").unwrap();
        assert_eq!(bs.len(), 4);
        assert_eq!(bs.as_slice(), &[false, true, true, false]);
        assert_eq!(bs.to_index(), 6);
        assert_eq!(bs.to_string(), "0110");
    }

    #[test]
    fn test_bitstring_invalid() {
        assert!(matches!(
            Bitstring::parse("01a1"),
            Err(FishermanError::InvalidBitstring(_))
        ));
        assert!("012".parse::<Bitstring>().is_err());
    }

    #[test]
    fn test_bitstring_from_index() {
        let bs = Bitstring::from_index(5, 4);
        assert_eq!(bs.as_slice(), &[true, false, true, false]);
        assert_eq!(bs.to_string(), "0101");
        assert_eq!(bs.popcount(), 2);

        // Truncated to the requested width
        assert_eq!(Bitstring::from_index(7, 2).to_index(), 3);
        assert!(Bitstring::from_index(3, 0).is_empty());
    }

    #[test]
    fn test_bitstring_json() {
        let bs = Bitstring::parse("101").unwrap();
        let text = serde_json::to_string(&bs).unwrap();
        assert_eq!(text, r#"{"bits":[true,false,true]}"#);
        assert_eq!(serde_json::from_str::<Bitstring>(&text).unwrap(), bs);
    }

    #[test]
    fn test_bitstring_wide() {
        let bs = Bitstring::from_index(1, 80);
        assert_eq!(bs.len(), 80);
        assert_eq!(bs.to_index(), 1);
        assert_eq!(bs.get(79), Some(false));
        assert_eq!(bs.get(80), None);
    }

    #[test]
    fn test_triangular_len() {
        assert_eq!(TriangularIndex::new(0).unwrap().len(), 0);
        assert_eq!(TriangularIndex::new(1).unwrap().len(), 1);
        assert_eq!(TriangularIndex::new(3).unwrap().len(), 6);
        assert_eq!(TriangularIndex::new(4).unwrap().len(), 10);
        assert!(TriangularIndex::new(usize::MAX).is_err());
    }

    #[test]
    fn test_triangular_offset_matches_iteration() {
        let idx = TriangularIndex::new(5).unwrap();
        for (k, (i, j)) in idx.iter().enumerate() {
            assert_eq!(idx.offset(i, j), Some(k));
        }
        assert_eq!(idx.iter().count(), idx.len());
        assert_eq!(idx.offset(2, 1), None);
        assert_eq!(idx.offset(0, 5), None);
    }

    #[test]
    fn test_triangular_from_len() {
        assert_eq!(TriangularIndex::from_len(0).unwrap().dim(), 0);
        assert_eq!(TriangularIndex::from_len(6).unwrap().dim(), 3);
        assert_eq!(TriangularIndex::from_len(10).unwrap().dim(), 4);

        let err = TriangularIndex::from_len(5).unwrap_err();
        assert_eq!(
            err,
            FishermanError::InvalidTriangularLength {
                len: 5,
                n: 3,
                expected: 6
            }
        );
    }

    #[test]
    fn test_triangular_from_len_near_max() {
        // No triangle above these counts is representable
        for len in [usize::MAX, usize::MAX - 1] {
            match TriangularIndex::from_len(len) {
                Err(FishermanError::InvalidTriangularLength { n, expected, .. }) => {
                    assert!(expected < len);
                    assert!(TriangularIndex::new(n + 1).is_err());
                }
                other => panic!("expected InvalidTriangularLength, got {:?}", other),
            }
        }
    }
}
