use lazy_static::lazy_static;
use regex::Regex;

/// The whole normalized cédula: prefix, date, sequence number and letter.
/// Structure only, the check letter is not verified.
pub const CEDULA_PATTERN: &str =
    r"^[0-9]{3}(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[012])([0-9]{2})[0-9]{4}[A-Y]$";

lazy_static! {
    static ref PATTERN_REGEX: Regex = Regex::new(CEDULA_PATTERN).unwrap();
    static ref PREFIX_REGEX: Regex = Regex::new(r"^[0-9]{3}$").unwrap();
    // Day 01-31, month 01-12, any two digit year. Day counts per month and
    // leap years are not checked.
    static ref DATE_REGEX: Regex =
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[012])([0-9]{2})$").unwrap();
    // Sequence number plus the check letter. I and O are accepted here and
    // rejected later by the checksum since LETTER_TABLE never produces them.
    static ref SUFFIX_REGEX: Regex = Regex::new(r"^[0-9]{4}[A-Y]$").unwrap();
}

/// Structure of a full normalized candidate. Agrees with the prefix, date and
/// suffix rules combined.
pub fn is_pattern_format_valid(cedula: &str) -> bool {
    PATTERN_REGEX.is_match(cedula)
}

pub fn is_prefix_format_valid(prefix: &str) -> bool {
    PREFIX_REGEX.is_match(prefix)
}

pub fn is_date_format_valid(date: &str) -> bool {
    DATE_REGEX.is_match(date)
}

/// `suffix` is the 5 character span holding the sequence number and the letter.
pub fn is_suffix_format_valid(suffix: &str) -> bool {
    SUFFIX_REGEX.is_match(suffix)
}
