use std::{fmt::Display, ops::Deref};

use crate::{Error, OFFSET_DIGIT_COUNT};

/// A sequence of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    digits: Vec<u32>,
}

impl TryFrom<&str> for Signal {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .chars()
            .map(|c| c.to_digit(10).ok_or(Error::InvalidSignalChar(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_digits)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", digits_to_string(&self.digits))
    }
}

impl Deref for Signal {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}

impl Signal {
    pub(crate) fn from_digits(digits: Vec<u32>) -> Self {
        Self { digits }
    }

    /// The offset given in the first seven digits.
    pub fn message_offset(&self) -> Result<usize, Error> {
        if self.digits.len() < OFFSET_DIGIT_COUNT {
            return Err(Error::SignalTooShort(self.digits.len(), OFFSET_DIGIT_COUNT));
        }

        Ok(self
            .digits
            .iter()
            .take(OFFSET_DIGIT_COUNT)
            .fold(0, |acc, d| acc * 10 + (*d as usize)))
    }

    /// The first `n` digits as text.
    pub fn head(&self, n: usize) -> Result<String, Error> {
        self.digits
            .get(..n)
            .map(digits_to_string)
            .ok_or(Error::SignalTooShort(self.digits.len(), n))
    }
}

/// Every digit must be below 10, `Signal` parsing and both transforms only
/// ever produce such digits.
pub fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

#[test]
fn test_parse_signal() {
    let signal = Signal::try_from("0123456789").unwrap();
    assert_eq!(&signal[..], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(signal.to_string(), "0123456789");
}

#[test]
fn test_parse_invalid_char() {
    assert!(matches!(
        Signal::try_from("12a4"),
        Err(Error::InvalidSignalChar('a'))
    ));
    assert!(matches!(
        Signal::try_from("12 4"),
        Err(Error::InvalidSignalChar(' '))
    ));
}

#[test]
fn test_message_offset() {
    let signal = Signal::try_from("03036732577212944063491565474664").unwrap();
    assert_eq!(signal.message_offset().unwrap(), 303673);
    let signal = Signal::try_from("0000001").unwrap();
    assert_eq!(signal.message_offset().unwrap(), 1);
    assert!(Signal::try_from("000000").unwrap().message_offset().is_err());
}

#[test]
fn test_digits_to_string() {
    assert_eq!(digits_to_string(&[0, 4, 4, 6, 2, 0, 2, 6]), "04462026");
    assert_eq!(digits_to_string(&[]), "");
}

#[test]
#[should_panic]
fn test_digits_to_string_rejects_non_digit() {
    digits_to_string(&[1, 10]);
}

#[test]
fn test_head() {
    let signal = Signal::try_from("987654321").unwrap();
    assert_eq!(signal.head(8).unwrap(), "98765432");
    assert!(matches!(signal.head(10), Err(Error::SignalTooShort(9, 10))));
}
