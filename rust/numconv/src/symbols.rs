//! Glyph tables and literal byte sequences used by the text encoders.

/// Uppercase hexadecimal alphabet; index `i` holds the glyph for nibble `i`.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decimal alphabet; index `i` holds the glyph for digit `i`.
pub const DECIMAL_DIGITS: &[u8; 10] = b"0123456789";

pub const WHITESPACE: &[u8] = b" ";
pub const NEWLINE: &[u8] = b"\n";
pub const TAB: &[u8] = b"\t";
pub const COLON: &[u8] = b":";
pub const DOT: &[u8] = b".";
pub const MINUS: &[u8] = b"-";

/// Prefix conventionally printed before hexadecimal values and error codes.
pub const HEX_PREFIX: &[u8] = b"0x";

/// Glyph for a hexadecimal nibble. Only the low four bits of `nibble` are used.
#[inline]
pub fn hex_glyph(nibble: u64) -> u8 {
    HEX_DIGITS[(nibble & 0x0F) as usize]
}

/// Glyph for a decimal digit.
///
/// `digit` must be below 10.
#[inline]
pub fn decimal_glyph(digit: u64) -> u8 {
    debug_assert!(digit < 10);
    DECIMAL_DIGITS[digit as usize]
}
