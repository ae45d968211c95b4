use crate::checksum::{self, BODY_LENGTH, LETTER_TABLE};
use crate::error::InvalidReason;
use crate::format_rules::{
    is_date_format_valid, is_pattern_format_valid, is_prefix_format_valid, is_suffix_format_valid,
};
use crate::normalization::CEDULA_LENGTH;
use crate::str_utils::char_slice;
use std::ops::Range;

pub const PREFIX_RANGE: Range<usize> = 0..3;
pub const DATE_RANGE: Range<usize> = 3..9;
pub const SEQUENCE_RANGE: Range<usize> = 9..13;
/// The suffix format rule covers the sequence number and the check letter.
pub const SUFFIX_RANGE: Range<usize> = 9..CEDULA_LENGTH;
pub const LETTER_RANGE: Range<usize> = BODY_LENGTH..CEDULA_LENGTH;
pub const BODY_RANGE: Range<usize> = 0..BODY_LENGTH;

/// Borrowed view of the fixed-width fields of a normalized cédula.
///
/// Offsets are in characters, so a 14 character candidate holding non-ASCII
/// text is split safely and then rejected by the format rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CedulaFields<'a> {
    cedula: &'a str,
    prefix: &'a str,
    date: &'a str,
    suffix: &'a str,
    letter: char,
    body: &'a str,
}

impl<'a> CedulaFields<'a> {
    /// Split a normalized candidate. Returns `None` unless it has exactly 14 characters.
    pub fn new(normalized: &'a str) -> Option<Self> {
        if normalized.chars().count() != CEDULA_LENGTH {
            return None;
        }

        Some(Self {
            cedula: normalized,
            prefix: char_slice(normalized, PREFIX_RANGE.start, PREFIX_RANGE.end)?,
            date: char_slice(normalized, DATE_RANGE.start, DATE_RANGE.end)?,
            suffix: char_slice(normalized, SUFFIX_RANGE.start, SUFFIX_RANGE.end)?,
            letter: char_slice(normalized, LETTER_RANGE.start, LETTER_RANGE.end)?
                .chars()
                .next()?,
            body: char_slice(normalized, BODY_RANGE.start, BODY_RANGE.end)?,
        })
    }

    pub fn cedula(&self) -> &'a str {
        self.cedula
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    pub fn date(&self) -> &'a str {
        self.date
    }

    /// Sequence number and check letter, characters `[9, 14)`.
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Everything but the check letter.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Structure of the whole candidate, without the checksum.
    pub fn is_pattern_valid(&self) -> bool {
        is_pattern_format_valid(self.cedula)
    }

    pub fn is_prefix_valid(&self) -> bool {
        is_prefix_format_valid(self.prefix)
    }

    pub fn is_date_valid(&self) -> bool {
        is_date_format_valid(self.date)
    }

    pub fn is_suffix_valid(&self) -> bool {
        is_suffix_format_valid(self.suffix)
    }

    pub fn is_letter_valid(&self) -> bool {
        self.calculate_letter() == Some(self.letter)
    }

    pub fn letter_position(&self) -> Option<usize> {
        checksum::letter_position(self.body)
    }

    pub fn calculate_letter(&self) -> Option<char> {
        self.letter_position()
            .and_then(|position| LETTER_TABLE.get(position).copied())
    }

    /// Run the field checks in order and report the first failure.
    pub fn check(&self) -> Result<(), InvalidReason> {
        if !self.is_prefix_valid() {
            return Err(InvalidReason::InvalidPrefix);
        }
        if !self.is_date_valid() {
            return Err(InvalidReason::InvalidDate);
        }
        if !self.is_suffix_valid() {
            return Err(InvalidReason::InvalidSuffix);
        }
        if !self.is_letter_valid() {
            return Err(InvalidReason::ChecksumMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_field_offsets() {
        let fields = CedulaFields::new("0012510750012S").unwrap();
        assert_eq!(fields.cedula(), "0012510750012S");
        assert_eq!(fields.prefix(), "001");
        assert_eq!(fields.date(), "251075");
        assert_eq!(fields.suffix(), "0012S");
        assert_eq!(fields.letter(), 'S');
        assert_eq!(fields.body(), "0012510750012");
    }

    #[test]
    fn requires_exact_length() {
        assert_eq!(CedulaFields::new(""), None);
        assert_eq!(CedulaFields::new("0012510750012"), None);
        assert_eq!(CedulaFields::new("00125130750012A"), None);
    }

    #[test]
    fn splits_non_ascii_on_char_boundaries() {
        let fields = CedulaFields::new("ñ012510750012S").unwrap();
        assert_eq!(fields.prefix(), "ñ01");
        assert_eq!(fields.body(), "ñ012510750012");
        assert_eq!(fields.letter_position(), None);
        assert_eq!(fields.calculate_letter(), None);
        assert_eq!(fields.check(), Err(InvalidReason::InvalidPrefix));
    }

    #[test]
    fn test_letter_check() {
        let fields = CedulaFields::new("0012510750012A").unwrap();
        assert_eq!(fields.letter_position(), Some(16));
        assert_eq!(fields.calculate_letter(), Some('S'));
        assert!(!fields.is_letter_valid());
        assert_eq!(fields.check(), Err(InvalidReason::ChecksumMismatch));

        let fields = CedulaFields::new("0012510750012S").unwrap();
        assert!(fields.is_letter_valid());
        assert_eq!(fields.check(), Ok(()));
    }

    #[test]
    fn checks_short_circuit_in_order() {
        let test_cases = vec![
            // bad prefix, date and letter
            ("12A3201990012S", InvalidReason::InvalidPrefix),
            // bad date and letter
            ("0013201990012S", InvalidReason::InvalidDate),
            // bad suffix letter, also absent from LETTER_TABLE
            ("0012510750012Z", InvalidReason::InvalidSuffix),
            // bad suffix digits
            ("001251075001AS", InvalidReason::InvalidSuffix),
            // I passes the suffix rule but is never a check letter
            ("0012510750012I", InvalidReason::ChecksumMismatch),
            ("0012510750012O", InvalidReason::ChecksumMismatch),
        ];
        for (cedula, reason) in test_cases {
            let fields = CedulaFields::new(cedula).unwrap();
            assert_eq!(fields.check(), Err(reason), "cedula: {cedula}");
        }
    }

    #[test]
    fn pattern_matches_field_checks() {
        let cedulas = vec![
            "0012510750012S",
            "0012510750012A",
            "0012510750012I",
            "12A3201990012S",
            "0013201990012S",
            "0012510750012Z",
            "001251075001AS",
            "ñ012510750012S",
        ];
        for cedula in cedulas {
            let fields = CedulaFields::new(cedula).unwrap();
            assert_eq!(
                fields.is_pattern_valid(),
                fields.is_prefix_valid() && fields.is_date_valid() && fields.is_suffix_valid(),
                "cedula: {cedula}"
            );
        }

        // well formed, wrong letter
        let fields = CedulaFields::new("0012510750012A").unwrap();
        assert!(fields.is_pattern_valid());
        assert!(!fields.is_letter_valid());
    }
}
