use crate::error::InvalidReason;
use crate::fields::{BODY_RANGE, DATE_RANGE, LETTER_RANGE, PREFIX_RANGE, SEQUENCE_RANGE};
use crate::validation::validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cédula that passed every check.
///
/// Holds the normalized form (14 ASCII characters, no hyphens, upper-case).
/// The only way to build one is [validate], so the accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cedula(String);

impl Cedula {
    /// Only called once the candidate passed every check.
    pub(crate) fn from_validated(normalized: String) -> Self {
        Cedula(normalized)
    }

    /// Normalized form, e.g. `0012510750012S`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Department and municipality code.
    pub fn prefix(&self) -> &str {
        &self.0[PREFIX_RANGE]
    }

    /// Birth date as DDMMYY.
    pub fn date(&self) -> &str {
        &self.0[DATE_RANGE]
    }

    pub fn sequence(&self) -> &str {
        &self.0[SEQUENCE_RANGE]
    }

    pub fn check_letter(&self) -> char {
        // validated cédulas are ASCII, so the byte is the char
        char::from(self.0.as_bytes()[LETTER_RANGE.start])
    }

    /// The 13 digits the check letter is computed from.
    pub fn body(&self) -> &str {
        &self.0[BODY_RANGE]
    }

    /// Day of birth, 1-31.
    pub fn birth_day(&self) -> u8 {
        two_digits(&self.date()[0..2])
    }

    /// Month of birth, 1-12.
    pub fn birth_month(&self) -> u8 {
        two_digits(&self.date()[2..4])
    }

    /// Last two digits of the year of birth. The century is not encoded.
    pub fn birth_year_of_century(&self) -> u8 {
        two_digits(&self.date()[4..6])
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn two_digits(digits: &str) -> u8 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + b.wrapping_sub(b'0'))
}

/// Printed in the hyphenated form found on the document, `001-251075-0012S`.
impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}{}",
            self.prefix(),
            self.date(),
            self.sequence(),
            self.check_letter()
        )
    }
}

impl FromStr for Cedula {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for Cedula {
    type Error = InvalidReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Cedula> for String {
    fn from(value: Cedula) -> Self {
        value.0
    }
}

impl AsRef<str> for Cedula {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
