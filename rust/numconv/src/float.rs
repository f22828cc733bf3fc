//! Fixed-precision decimal rendering of floating-point values.
//!
//! The fractional digits are produced by repeated multiply-by-ten and
//! truncation, not by rounding. Binary floating-point error accumulates
//! across the iterations and shows up in the trailing digits; callers
//! comparing output against exact decimal expectations must allow for it.

use numconv_common::verify_precision;

use crate::{
    decimal::DecimalBuffer,
    scratch::FLOAT_CAPACITY,
    symbols::{DOT, MINUS, decimal_glyph},
    view::AsciiView,
};

/// Scratch buffer of the float family.
#[derive(Debug, Clone)]
pub struct FloatBuffer {
    buf: [u8; FLOAT_CAPACITY],
}

impl FloatBuffer {
    pub const fn new() -> FloatBuffer {
        FloatBuffer {
            buf: [0; FLOAT_CAPACITY],
        }
    }

    pub const fn capacity(&self) -> usize {
        FLOAT_CAPACITY
    }

    /// Renders `value` as `<integer part>.<precision digits>`.
    ///
    /// The integer part is produced by the signed decimal encoder, so
    /// `decimal` is overwritten as well. A negative value keeps its sign even
    /// when its integer part is zero. NaN renders as zeros; infinities
    /// saturate to the `i64` range and never fit.
    ///
    /// Fails with `TooMuchPrecisionForFloat` when the integer part, the
    /// separator and `precision` digits together exceed the buffer capacity.
    pub fn encode(
        &mut self,
        decimal: &mut DecimalBuffer,
        value: f64,
        precision: usize,
    ) -> crate::Result<AsciiView<'_>> {
        // Truncates toward zero and saturates.
        let integer = value as i64;
        let digits = decimal.int(integer);
        let sign: &[u8] = if integer == 0 && value < 0.0 { MINUS } else { &[] };
        let head = sign.len() + digits.len() + DOT.len();
        verify_precision!(head.saturating_add(precision), FLOAT_CAPACITY);

        let mut pos = 0;
        for part in [sign, digits.as_bytes(), DOT] {
            self.buf[pos..pos + part.len()].copy_from_slice(part);
            pos += part.len();
        }

        let mut fraction = value - integer as f64;
        if fraction < 0.0 {
            fraction = -fraction;
        }
        for slot in &mut self.buf[pos..pos + precision] {
            fraction *= 10.0;
            let digit = (fraction as u64).min(9);
            *slot = decimal_glyph(digit);
            fraction -= digit as f64;
        }
        Ok(AsciiView::new(&self.buf[..head + precision]))
    }
}

impl Default for FloatBuffer {
    fn default() -> Self {
        Self::new()
    }
}
