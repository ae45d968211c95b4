/// Check letters indexed by `body mod 23`. I, O and Z are never used.
pub const LETTER_TABLE: [char; 23] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y',
];

/// Number of digits in the numeric body.
pub const BODY_LENGTH: usize = 13;

/// Position of the check letter in [LETTER_TABLE] for a 13 digit numeric body.
///
/// The largest body (10^13 - 1) fits comfortably in a `u64`, so the remainder is
/// exact. Returns `None` if `body` is not exactly 13 ASCII digits.
pub fn letter_position(body: &str) -> Option<usize> {
    if body.len() != BODY_LENGTH || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number = body
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

    Some((number % LETTER_TABLE.len() as u64) as usize)
}

/// The check letter a 13 digit numeric body must end with.
pub fn check_letter(body: &str) -> Option<char> {
    letter_position(body).map(|position| LETTER_TABLE[position])
}
