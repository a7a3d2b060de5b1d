use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

pub mod fft;
pub mod pattern;
pub mod signal;

use fft::{PartialFFT, RepeatSignal, FFT};
use signal::{digits_to_string, Signal};

/// Phases applied by both transforms.
pub const PHASE_COUNT: usize = 100;
/// How many times the signal is repeated to form the real signal.
pub const REPEAT_COUNT: usize = 10000;
/// Leading digits that form the message offset.
pub const OFFSET_DIGIT_COUNT: usize = 7;
/// Digits in a message.
pub const MESSAGE_LEN: usize = 8;

#[derive(Debug)]
pub enum Error {
    EmptyInput(String),
    InvalidSignalChar(char),
    WrongSignalLen(usize, usize),
    SignalTooShort(usize, usize),
    OffsetOutOfRange(usize, usize),
    OffsetNotInSecondHalf(usize, usize),
    SelfCheckFailed(String, String, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput(path) => write!(f, "No input data in given file({})", path),
            Error::InvalidSignalChar(c) => write!(
                f,
                "Invalid character({}) found in signal, only digits are expected",
                c
            ),
            Error::WrongSignalLen(given_len, expected_len) => write!(
                f,
                "Given signal in wrong length({}), expected {}",
                given_len, expected_len
            ),
            Error::SignalTooShort(given_len, min_len) => write!(
                f,
                "Given signal is too short({}), at least {} digits are expected",
                given_len, min_len
            ),
            Error::OffsetOutOfRange(offset, real_len) => write!(
                f,
                "Message offset({}) is out of the real signal(length {})",
                offset, real_len
            ),
            Error::OffsetNotInSecondHalf(offset, real_len) => write!(
                f,
                "Message offset({}) is not in the second half of the real signal(length {}), can't use suffix sums",
                offset, real_len
            ),
            Error::SelfCheckFailed(signal, expected, given) => write!(
                f,
                "Self check failed on signal({}), expected message {}, given {}",
                signal, expected, given
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Installs the stderr log subscriber, filtered by `RUST_LOG`(default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn read_signal<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput(path.as_ref().display().to_string()).into());
    }

    Signal::try_from(text)
        .with_context(|| format!("Failed to parse signal in given file({}).", path.as_ref().display()))
}

/// First eight digits after running the full transform `phase_count` times.
pub fn direct_message(signal: &Signal, phase_count: usize) -> Result<String> {
    if signal.len() < MESSAGE_LEN {
        return Err(Error::SignalTooShort(signal.len(), MESSAGE_LEN).into());
    }

    let fft = FFT::new(signal.len());
    let output = fft
        .process_n(signal, phase_count)
        .context("Failed to process signal with full transform.")?;

    Ok(output.head(MESSAGE_LEN)?)
}

/// The eight digits at the embedded offset of the real(repeated) signal,
/// after `phase_count` phases.
pub fn offset_message(signal: &Signal, phase_count: usize) -> Result<String> {
    let offset = signal.message_offset()?;
    let real_signal = RepeatSignal::new(signal, REPEAT_COUNT);
    let pfft = PartialFFT::new(offset, &real_signal, phase_count).with_context(|| {
        format!(
            "Failed to process real signal from message offset({}).",
            offset
        )
    })?;

    let digits = (offset..)
        .take(MESSAGE_LEN)
        .map(|ind| pfft.nth_ele(ind))
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(digits_to_string(&digits))
}

const DIRECT_CHECKS: [(&str, &str); 3] = [
    ("80871224585914546619083218645595", "24176176"),
    ("19617804207202209144916044189917", "73745418"),
    ("69317163492948606335995924319873", "52432133"),
];

const OFFSET_CHECKS: [(&str, &str); 3] = [
    ("03036732577212944063491565474664", "84462026"),
    ("02935109699940807407585447034323", "78725270"),
    ("03081770884921959731165446850517", "53553731"),
];

fn check_message(
    text: &str,
    expected: &str,
    message_fn: fn(&Signal, usize) -> Result<String>,
) -> Result<()> {
    let signal = Signal::try_from(text)?;
    let message = message_fn(&signal, PHASE_COUNT)?;
    trace!("Self check on {} gives {}.", text, message);
    if message != expected {
        return Err(
            Error::SelfCheckFailed(text.to_string(), expected.to_string(), message).into(),
        );
    }

    Ok(())
}

/// Runs both transforms on known signals and compares with their known messages.
pub fn self_check() -> Result<()> {
    info!("Self check begins.");
    for (text, expected) in DIRECT_CHECKS {
        check_message(text, expected, direct_message)?;
    }
    for (text, expected) in OFFSET_CHECKS {
        check_message(text, expected, offset_message)?;
    }
    info!("Self check passed.");

    Ok(())
}

#[test]
fn test_direct_message() {
    for (text, expected) in DIRECT_CHECKS {
        let signal = Signal::try_from(text).unwrap();
        assert_eq!(direct_message(&signal, PHASE_COUNT).unwrap(), expected);
    }
}

#[test]
fn test_offset_message() {
    for (text, expected) in OFFSET_CHECKS {
        let signal = Signal::try_from(text).unwrap();
        assert_eq!(offset_message(&signal, PHASE_COUNT).unwrap(), expected);
    }
}

#[test]
fn test_messages_are_deterministic() {
    let signal = Signal::try_from(DIRECT_CHECKS[0].0).unwrap();
    let first = direct_message(&signal, PHASE_COUNT).unwrap();
    assert_eq!(direct_message(&signal, PHASE_COUNT).unwrap(), first);
    assert_eq!(first.len(), MESSAGE_LEN);
    assert!(first.chars().all(|c| c.is_ascii_digit()));

    let signal = Signal::try_from(OFFSET_CHECKS[1].0).unwrap();
    let first = offset_message(&signal, PHASE_COUNT).unwrap();
    assert_eq!(offset_message(&signal, PHASE_COUNT).unwrap(), first);
    assert_eq!(first.len(), MESSAGE_LEN);
}

#[test]
fn test_phase_count_matters() {
    let signal = Signal::try_from("12345678").unwrap();
    assert_eq!(direct_message(&signal, 3).unwrap(), "03415518");
    assert_eq!(direct_message(&signal, 4).unwrap(), "01029498");
}

#[test]
fn test_short_signal() {
    let signal = Signal::try_from("1234567").unwrap();
    assert!(direct_message(&signal, PHASE_COUNT).is_err());
    let signal = Signal::try_from("123456").unwrap();
    assert!(offset_message(&signal, PHASE_COUNT).is_err());
}

#[test]
fn test_direct_message_short_signal() {
    let signal = Signal::try_from("12345").unwrap();
    let err = direct_message(&signal, PHASE_COUNT).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::SignalTooShort(5, 8))
    ));
    // Zero phases still needs eight digits.
    assert!(direct_message(&signal, 0).is_err());
}

#[test]
fn test_offset_out_of_real_signal() {
    // Offset 8087122 is beyond 32 * 10000 digits.
    let signal = Signal::try_from(DIRECT_CHECKS[0].0).unwrap();
    let err = offset_message(&signal, PHASE_COUNT).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::OffsetOutOfRange(8087122, 320000))
    ));
}

#[test]
fn test_offset_in_first_half() {
    let signal = Signal::try_from("00000010").unwrap();
    let err = offset_message(&signal, PHASE_COUNT).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::OffsetNotInSecondHalf(1, 80000))
    ));
}

#[test]
fn test_self_check() {
    assert!(self_check().is_ok());
}
