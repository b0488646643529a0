//! Byte classes shared by the parser and the pattern matcher.

#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline]
pub fn is_printable(byte: u8) -> bool {
    (32..127).contains(&byte)
}

/// Index of the first non-whitespace byte at or after `idx`.
#[inline]
pub fn skip_spaces(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() && is_space(bytes[idx]) {
        idx += 1;
    }
    idx
}

/// Index just past the run of bytes satisfying `pred` that starts at `idx`.
#[inline]
pub fn scan_while(bytes: &[u8], mut idx: usize, pred: impl Fn(u8) -> bool) -> usize {
    while idx < bytes.len() && pred(bytes[idx]) {
        idx += 1;
    }
    idx
}
