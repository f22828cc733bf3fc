//! Decimal rendering of integers, filled from the end of the buffer backward.

use num_traits::{AsPrimitive, Signed, Unsigned};

use crate::{
    scratch::DECIMAL_CAPACITY,
    symbols::{DECIMAL_DIGITS, MINUS, decimal_glyph},
    view::AsciiView,
};

/// Scratch buffer of the decimal family.
///
/// Every call may overwrite any byte of the buffer, including the bytes a
/// previous view pointed at.
#[derive(Debug, Clone)]
pub struct DecimalBuffer {
    buf: [u8; DECIMAL_CAPACITY],
}

impl DecimalBuffer {
    pub const fn new() -> DecimalBuffer {
        DecimalBuffer {
            buf: [0; DECIMAL_CAPACITY],
        }
    }

    pub const fn capacity(&self) -> usize {
        DECIMAL_CAPACITY
    }

    /// Writes the digits of `value` right-aligned and returns the index of the
    /// first digit.
    fn write_digits(&mut self, mut value: u64) -> usize {
        let mut start = DECIMAL_CAPACITY;
        if value == 0 {
            start -= 1;
            self.buf[start] = DECIMAL_DIGITS[0];
            return start;
        }
        while value > 0 && start > 0 {
            start -= 1;
            self.buf[start] = decimal_glyph(value % 10);
            value /= 10;
        }
        start
    }

    /// Renders `value` with no leading zeros; zero renders as `"0"`.
    pub fn uint(&mut self, value: u64) -> AsciiView<'_> {
        let start = self.write_digits(value);
        AsciiView::new(&self.buf[start..])
    }

    /// Renders `value` with a leading `-` when negative.
    ///
    /// The magnitude is taken in unsigned arithmetic, so `i64::MIN` renders
    /// without overflow.
    pub fn int(&mut self, value: i64) -> AsciiView<'_> {
        let mut start = self.write_digits(value.unsigned_abs());
        if value < 0 && start > 0 {
            start -= 1;
            self.buf[start] = MINUS[0];
        }
        AsciiView::new(&self.buf[start..])
    }

    /// Renders `value` left-padded with zeros to `width` digits.
    ///
    /// A representation already at least `width` long is returned unchanged.
    /// `width` is clamped to the buffer capacity.
    pub fn uint_fixed(&mut self, value: u64, width: usize) -> AsciiView<'_> {
        let width = width.min(DECIMAL_CAPACITY);
        let start = self.write_digits(value);
        let len = DECIMAL_CAPACITY - start;
        if len >= width {
            return AsciiView::new(&self.buf[start..]);
        }
        let pad = width - len;
        self.buf.copy_within(start.., pad);
        self.buf[..pad].fill(DECIMAL_DIGITS[0]);
        AsciiView::new(&self.buf[..width])
    }

    /// Renders any unsigned integer type that widens to `u64`.
    pub fn uint_from<T>(&mut self, value: T) -> AsciiView<'_>
    where
        T: Unsigned + AsPrimitive<u64>,
    {
        self.uint(value.as_())
    }

    /// Renders any signed integer type that widens to `i64`.
    pub fn int_from<T>(&mut self, value: T) -> AsciiView<'_>
    where
        T: Signed + AsPrimitive<i64>,
    {
        self.int(value.as_())
    }
}

impl Default for DecimalBuffer {
    fn default() -> Self {
        Self::new()
    }
}
