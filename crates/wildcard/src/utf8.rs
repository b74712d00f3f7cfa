/// Returns the width in bytes of the UTF-8 sequence starting with the leading byte `b`.
///
/// Continuation bytes and invalid leading bytes are reported as width 1,
/// which never happens for the first byte of a `str`.
#[inline]
pub const fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Returns the width in bytes of the first character of `s`, if any.
#[inline]
pub fn first_char_width(s: &str) -> Option<usize> {
    s.as_bytes().first().map(|&b| utf8_char_width(b))
}
