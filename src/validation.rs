use crate::cedula::Cedula;
use crate::error::InvalidReason;
use crate::fields::CedulaFields;
use crate::normalization::normalize_cedula;

/// Validate a raw cédula candidate.
///
/// The candidate is normalized first (see [normalize_cedula]), then the prefix,
/// date, suffix and check letter are checked in that order. The first failing
/// check is returned. Any input, however malformed, produces an answer.
pub fn validate(raw: &str) -> Result<Cedula, InvalidReason> {
    let normalized = normalize_cedula(raw).ok_or(InvalidReason::MalformedLength)?;
    validate_normalized(normalized)
}

pub(crate) fn validate_normalized(normalized: String) -> Result<Cedula, InvalidReason> {
    let fields = CedulaFields::new(&normalized).ok_or(InvalidReason::MalformedLength)?;
    fields.check()?;
    Ok(Cedula::from_validated(normalized))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::checksum::LETTER_TABLE;

    #[test]
    fn test_valid_cedulas() {
        let valid_ids = vec![
            "0012510750012S",
            "001-251075-0012S",
            "001-25-1075-0012-S",
            "001-251075-0012s",
            "  0012510750012s  ",
            "281-150781-0001B",
            "121-250599-0000D",
            "001-311299-0001B",
        ];
        for id in valid_ids {
            let cedula = validate(id);
            assert!(cedula.is_ok(), "input: {id:?} -> {cedula:?}");
        }
    }

    #[test]
    fn test_invalid_cedulas() {
        let invalid_ids = vec![
            ("", InvalidReason::MalformedLength),
            ("-", InvalidReason::MalformedLength),
            ("00125130750012A", InvalidReason::MalformedLength),
            ("001251075001S", InvalidReason::MalformedLength),
            ("12A-251075-0012S", InvalidReason::InvalidPrefix),
            ("001-320199-0012S", InvalidReason::InvalidDate),
            ("001-251375-0012S", InvalidReason::InvalidDate),
            ("001-000175-0012S", InvalidReason::InvalidDate),
            ("001-251075-1234Z", InvalidReason::InvalidSuffix),
            ("001-251075-12X4S", InvalidReason::InvalidSuffix),
            ("001-251075-0012A", InvalidReason::ChecksumMismatch),
            ("001-251075-0012I", InvalidReason::ChecksumMismatch),
            // non-ASCII letters are not upper-cased and fail the suffix rule
            ("001-251075-0012ß", InvalidReason::InvalidSuffix),
        ];
        for (id, reason) in invalid_ids {
            assert_eq!(validate(id), Err(reason), "input: {id:?}");
        }
    }

    #[test]
    fn only_one_letter_matches_a_body() {
        let body = "0012510750012";
        let accepted: Vec<char> = ('A'..='Z')
            .filter(|letter| validate(&format!("{body}{letter}")).is_ok())
            .collect();
        assert_eq!(accepted, vec!['S']);
        assert!(LETTER_TABLE.contains(&'S'));
    }

    #[test]
    fn wrong_length_is_never_valid() {
        let base = "0012510750012S";
        for len in 0..base.len() {
            assert_eq!(
                validate(&base[..len]),
                Err(InvalidReason::MalformedLength)
            );
        }
        for extra in ["S", "0", "-S", "SS"] {
            assert_eq!(
                validate(&format!("{base}{extra}")),
                Err(InvalidReason::MalformedLength),
                "extra: {extra}"
            );
        }
    }
}
