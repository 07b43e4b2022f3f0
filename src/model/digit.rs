// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

/// A single decimal keypad digit.
///
/// The keypad is digit-only (no decimal point), so the only values a UI can
/// produce are `0..=9`; the constructor enforces that range once and the
/// transitions accept every `Digit` unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value > 9 {
            return Err(DigitError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_digit(10) {
            Some(d) => Self::new(d as u8),
            None => Err(DigitError::NotADecimalDigit(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    OutOfRange(u8),
    NotADecimalDigit(char),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(f, "keypad digit out of range (got {value}, expected 0..=9)")
            }
            Self::NotADecimalDigit(ch) => {
                write!(f, "keypad digit must be a decimal digit character (got '{ch}')")
            }
        }
    }
}

impl std::error::Error for DigitError {}
