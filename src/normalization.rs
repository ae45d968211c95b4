/// Number of characters in a normalized cédula.
pub const CEDULA_LENGTH: usize = 14;

const SEPARATOR: char = '-';

/// Normalize a raw cédula candidate.
///
/// Surrounding whitespace is trimmed, every `-` is removed and ASCII letters
/// are upper-cased. Returns `None` unless exactly [CEDULA_LENGTH] characters
/// remain, so every value handed out here can be sliced at the fixed field
/// offsets.
pub fn normalize_cedula(raw: &str) -> Option<String> {
    let stripped = raw.trim().replace(SEPARATOR, "");

    if stripped.chars().count() != CEDULA_LENGTH {
        return None;
    }

    // ASCII-only so the character count cannot change
    Some(stripped.to_ascii_uppercase())
}
