use std::mem;

use tracing::{debug, info};

use crate::{pattern::PatternMatrix, signal::Signal, Error};

/// Full transform, every phase multiplies the signal by the pattern matrix.
pub struct FFT {
    matrix: PatternMatrix,
}

impl FFT {
    pub fn new(signal_len: usize) -> Self {
        Self {
            matrix: PatternMatrix::new(signal_len),
        }
    }

    pub fn process_n(&self, signal: &Signal, phase_count: usize) -> Result<Signal, Error> {
        let signal_len = signal.len();
        let matrix_len = self.matrix.signal_len();
        if signal_len != matrix_len {
            return Err(Error::WrongSignalLen(signal_len, matrix_len));
        }

        // Swap buffers after each phase, the result always ends in inputs.
        let mut inputs = signal.to_vec();
        let mut outputs = vec![0; signal_len];
        info!("Process of {} digits begins.", signal_len);
        for p_ind in 0..phase_count {
            self.matrix.apply(&inputs, &mut outputs);
            mem::swap(&mut inputs, &mut outputs);
            debug!("Phase {} completed.", p_ind);
        }
        info!("Process ends.");

        Ok(Signal::from_digits(inputs))
    }
}

/// A signal repeated `rep_count` times, without storing the repeats.
pub struct RepeatSignal<'a> {
    base: &'a [u32],
    rep_count: usize,
}

impl<'a> RepeatSignal<'a> {
    pub fn new(base: &'a [u32], rep_count: usize) -> Self {
        Self { base, rep_count }
    }

    fn len(&self) -> usize {
        self.base.len() * self.rep_count
    }

    pub fn iter_from(&self, offset: usize) -> impl Iterator<Item = u32> + '_ {
        (offset..self.len()).map(|ind| self.base[ind % self.base.len()])
    }
}

/// Transform of the part of a signal from `offset` to its end.
///
/// In the second half of a signal, every position pattern is zeros up to the
/// position and ones after it, so one phase is just a sum of the suffix. The
/// output digits before `offset` are never computed.
pub struct PartialFFT {
    offset: usize,
    real_len: usize,
    digits: Vec<u32>,
}

impl PartialFFT {
    pub fn new(offset: usize, signal: &RepeatSignal, phase_count: usize) -> Result<Self, Error> {
        let real_len = signal.len();
        if offset >= real_len {
            return Err(Error::OffsetOutOfRange(offset, real_len));
        }
        if offset * 2 < real_len {
            return Err(Error::OffsetNotInSecondHalf(offset, real_len));
        }

        let mut digits = signal.iter_from(offset).collect::<Vec<_>>();
        info!(
            "Partial process of {} digits from offset {} begins.",
            digits.len(),
            offset
        );
        for p_ind in 0..phase_count {
            let mut sum = 0;
            for d in digits.iter_mut().rev() {
                sum = (sum + *d) % 10;
                *d = sum;
            }
            debug!("Phase {} completed.", p_ind);
        }
        info!("Partial process ends.");

        Ok(Self {
            offset,
            real_len,
            digits,
        })
    }

    pub fn nth_ele(&self, ind: usize) -> Result<u32, Error> {
        ind.checked_sub(self.offset)
            .and_then(|i| self.digits.get(i))
            .copied()
            .ok_or(Error::OffsetOutOfRange(ind, self.real_len))
    }
}

#[test]
fn test_process_n() {
    let signal = Signal::try_from("12345678").unwrap();
    let fft = FFT::new(signal.len());
    let expects = ["48226158", "34040438", "03415518", "01029498"];
    for (ind, expect) in expects.iter().enumerate() {
        let output = fft.process_n(&signal, ind + 1).unwrap();
        assert_eq!(output.to_string(), *expect);
    }
    assert_eq!(fft.process_n(&signal, 0).unwrap(), signal);
}

#[test]
fn test_process_wrong_len() {
    let fft = FFT::new(4);
    let signal = Signal::try_from("12345678").unwrap();
    assert!(matches!(
        fft.process_n(&signal, 1),
        Err(Error::WrongSignalLen(8, 4))
    ));
}

#[test]
fn test_phase_count_changes_output() {
    let signal = Signal::try_from("80871224585914546619083218645595").unwrap();
    let fft = FFT::new(signal.len());
    assert_ne!(
        fft.process_n(&signal, 99).unwrap(),
        fft.process_n(&signal, 100).unwrap()
    );
}

#[test]
fn test_repeat_signal() {
    let base = [1, 2, 3];
    let signal = RepeatSignal::new(&base, 3);
    assert_eq!(signal.len(), 9);
    assert_eq!(signal.iter_from(9).count(), 0);
    assert_eq!(signal.iter_from(5).collect::<Vec<_>>(), vec![3, 1, 2, 3]);
}

#[test]
fn test_partial_matches_full_in_second_half() {
    // The last four digits of "12345678" after each phase are known.
    let base = [1, 2, 3, 4, 5, 6, 7, 8];
    let signal = RepeatSignal::new(&base, 1);
    let expects = ["6158", "0438", "5518", "9498"];
    for (ind, expect) in expects.iter().enumerate() {
        let pfft = PartialFFT::new(4, &signal, ind + 1).unwrap();
        let digits = (4..8)
            .map(|i| char::from_digit(pfft.nth_ele(i).unwrap(), 10).unwrap())
            .collect::<String>();
        assert_eq!(digits, *expect);
    }
}

#[test]
fn test_partial_out_of_range() {
    let base = [1, 2, 3, 4];
    let signal = RepeatSignal::new(&base, 2);
    assert!(matches!(
        PartialFFT::new(8, &signal, 1),
        Err(Error::OffsetOutOfRange(8, 8))
    ));
    assert!(matches!(
        PartialFFT::new(3, &signal, 1),
        Err(Error::OffsetNotInSecondHalf(3, 8))
    ));

    let pfft = PartialFFT::new(6, &signal, 1).unwrap();
    assert!(pfft.nth_ele(5).is_err());
    assert_eq!(pfft.nth_ele(7).unwrap(), 4);
    assert!(pfft.nth_ele(8).is_err());
}
