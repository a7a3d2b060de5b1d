use std::iter;

use rayon::{
    iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator},
    slice::ParallelSlice,
};

const BASE_PATTERN: [i8; 4] = [0, 1, 0, -1];

/// Weights applied to every input digit for the output digit at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPattern {
    weights: Vec<i8>,
}

impl PositionPattern {
    /// Builds the pattern for `position` in a signal of `signal_len` digits.
    /// Positions start at 1.
    pub fn new(signal_len: usize, position: usize) -> Self {
        debug_assert!(position > 0, "Position of pattern starts at 1");
        let block_len = BASE_PATTERN.len() * position;
        let tile_count = (signal_len + 1).div_ceil(block_len);
        let weights = iter::repeat(
            BASE_PATTERN
                .iter()
                .flat_map(move |w| iter::repeat(*w).take(position)),
        )
        .take(tile_count)
        .flatten()
        // Skip the very first weight.
        .skip(1)
        .take(signal_len)
        .collect();

        Self { weights }
    }

    pub fn weights(&self) -> &[i8] {
        &self.weights
    }
}

fn dot(weights: &[i8], digits: &[u32]) -> i64 {
    weights
        .iter()
        .zip(digits)
        .map(|(w, d)| i64::from(*w) * i64::from(*d))
        .sum()
}

/// All position patterns of one signal length, row by row.
pub struct PatternMatrix {
    signal_len: usize,
    weights: Vec<i8>,
}

impl PatternMatrix {
    pub fn new(signal_len: usize) -> Self {
        let weights = (1..=signal_len)
            .flat_map(|position| PositionPattern::new(signal_len, position).weights)
            .collect();

        Self {
            signal_len,
            weights,
        }
    }

    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// One phase: every output digit is the ones digit of its row's dot
    /// product with `inputs`.
    pub fn apply(&self, inputs: &[u32], outputs: &mut [u32]) {
        if self.signal_len == 0 {
            return;
        }

        outputs
            .par_iter_mut()
            .zip(self.weights.par_chunks(self.signal_len))
            .for_each(|(d, row)| {
                *d = (dot(row, inputs).unsigned_abs() % 10) as u32;
            });
    }
}

#[test]
fn test_first_position() {
    let pattern = PositionPattern::new(8, 1);
    assert_eq!(pattern.weights(), &[1, 0, -1, 0, 1, 0, -1, 0]);
}

#[test]
fn test_third_position() {
    // [0, 0, 0, 1, 1, 1, 0, 0, 0, -1, -1, -1] without the first weight.
    let pattern = PositionPattern::new(8, 3);
    assert_eq!(pattern.weights(), &[0, 0, 1, 1, 1, 0, 0, 0]);
}

#[test]
fn test_pattern_tiles_past_block() {
    let pattern = PositionPattern::new(15, 2);
    assert_eq!(
        pattern.weights(),
        &[0, 1, 1, 0, 0, -1, -1, 0, 0, 1, 1, 0, 0, -1, -1]
    );
}

#[test]
fn test_last_position() {
    for len in 1..20 {
        let pattern = PositionPattern::new(len, len);
        let weights = pattern.weights();
        assert_eq!(weights.len(), len);
        assert!(weights[..len - 1].iter().all(|w| *w == 0));
        assert_eq!(weights[len - 1], 1);
    }
}

#[test]
fn test_matrix_rows() {
    let matrix = PatternMatrix::new(8);
    assert_eq!(matrix.signal_len(), 8);
    assert_eq!(matrix.weights.len(), 64);
    for (ind, row) in matrix.weights.chunks(8).enumerate() {
        assert_eq!(row, PositionPattern::new(8, ind + 1).weights());
    }
}

#[test]
fn test_one_phase() {
    let matrix = PatternMatrix::new(8);
    let inputs = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut outputs = [0; 8];
    matrix.apply(&inputs, &mut outputs);
    assert_eq!(outputs, [4, 8, 2, 2, 6, 1, 5, 8]);
    assert_eq!(dot(PositionPattern::new(8, 1).weights(), &inputs), 1 - 3 + 5 - 7);
}

#[test]
#[should_panic]
fn test_position_zero() {
    PositionPattern::new(8, 0);
}
