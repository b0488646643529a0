pub const KEYWORDS: &[&str] = &["null", "true", "false"];

/// Capacity used by `Arena::default`.
pub const DEFAULT_ARENA_CAPACITY: usize = 1 << 16;

/// Scratch capacity for decoding literals embedded in a pattern.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 1024;

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Digits printed after the decimal point for non-integral numbers.
pub const FLOAT_PRECISION: usize = 6;

#[inline]
pub fn is_keyword(token: &[u8]) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.as_bytes() == token)
}
