use std::iter::once;

/// Find the byte index where the character at `char_index` starts.
/// Returns `input.len()` when `char_index` is exactly the character count.
pub fn char_to_byte_index(input: &str, char_index: usize) -> Option<usize> {
    input
        .char_indices()
        .map(|(byte_index, _)| byte_index)
        .chain(once(input.len()))
        .nth(char_index)
}

/// Slice `input` by character offsets `[start, end)` without ever splitting a
/// UTF-8 sequence.
pub fn char_slice(input: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let start_byte = char_to_byte_index(input, start)?;
    let end_byte = char_to_byte_index(input, end)?;
    input.get(start_byte..end_byte)
}
