//! The set of fixed-capacity scratch buffers shared by the text encoders.

use crate::{
    decimal::DecimalBuffer, float::FloatBuffer, hex::HexBuffer, view::AsciiView,
};

/// Capacity of the hex buffer: the digit count of a 64-bit value.
pub const HEX_CAPACITY: usize = 16;

/// Capacity of the decimal buffer: the digit count of `u64::MAX`.
pub const DECIMAL_CAPACITY: usize = 20;

/// Capacity of the float composition buffer.
pub const FLOAT_CAPACITY: usize = 8;

/// One buffer per encoder family.
///
/// The fields are public so independent families can be borrowed at the same
/// time: a hex view and a decimal view may coexist, two views of the same
/// family may not. The convenience methods below borrow the whole set and are
/// meant for the common one-result-at-a-time usage.
///
/// `new` is a `const fn`; firmware can keep a single set in a `static` for the
/// lifetime of the program.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffers {
    pub hex: HexBuffer,
    pub decimal: DecimalBuffer,
    pub float: FloatBuffer,
}

impl ScratchBuffers {
    pub const fn new() -> ScratchBuffers {
        ScratchBuffers {
            hex: HexBuffer::new(),
            decimal: DecimalBuffer::new(),
            float: FloatBuffer::new(),
        }
    }

    pub fn uint8_to_hex(&mut self, value: u8) -> AsciiView<'_> {
        self.hex.uint8(value)
    }

    pub fn uint16_to_hex(&mut self, value: u16) -> AsciiView<'_> {
        self.hex.uint16(value)
    }

    pub fn uint32_to_hex(&mut self, value: u32) -> AsciiView<'_> {
        self.hex.uint32(value)
    }

    pub fn uint64_to_hex(&mut self, value: u64) -> AsciiView<'_> {
        self.hex.uint64(value)
    }

    pub fn uint_to_decimal(&mut self, value: u64) -> AsciiView<'_> {
        self.decimal.uint(value)
    }

    pub fn int_to_decimal(&mut self, value: i64) -> AsciiView<'_> {
        self.decimal.int(value)
    }

    pub fn uint_to_decimal_fixed(&mut self, value: u64, width: usize) -> AsciiView<'_> {
        self.decimal.uint_fixed(value, width)
    }

    /// Renders `value` with `precision` truncated fractional digits.
    ///
    /// Overwrites both the decimal and the float buffers.
    pub fn float64_to_decimal(
        &mut self,
        value: f64,
        precision: usize,
    ) -> crate::Result<AsciiView<'_>> {
        self.float.encode(&mut self.decimal, value, precision)
    }

    pub fn float32_to_decimal(
        &mut self,
        value: f32,
        precision: usize,
    ) -> crate::Result<AsciiView<'_>> {
        self.float.encode(&mut self.decimal, value as f64, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchBuffers;
    use crate::Error;

    #[test]
    fn test_families_are_independent() {
        let mut scratch = ScratchBuffers::new();
        let hex = scratch.hex.uint16(0xBEEF);
        let dec = scratch.decimal.int(-17);
        assert_eq!(hex, "BEEF");
        assert_eq!(dec, "-17");
    }

    #[test]
    fn test_convenience_methods() {
        let mut scratch = ScratchBuffers::default();
        assert_eq!(scratch.uint8_to_hex(0x0A), "0A");
        assert_eq!(scratch.uint16_to_hex(0x1234), "1234");
        assert_eq!(scratch.uint32_to_hex(0xDEADBEEF), "DEADBEEF");
        assert_eq!(scratch.uint64_to_hex(1), "0000000000000001");
        assert_eq!(scratch.uint_to_decimal(0), "0");
        assert_eq!(scratch.int_to_decimal(i64::MIN), "-9223372036854775808");
        assert_eq!(scratch.uint_to_decimal_fixed(7, 3), "007");
        assert_eq!(scratch.float64_to_decimal(1.5, 2).unwrap(), "1.50");
        assert_eq!(scratch.float32_to_decimal(0.25, 2).unwrap(), "0.25");
        assert_eq!(
            scratch.float64_to_decimal(1.5, 7),
            Err(Error::TooMuchPrecisionForFloat)
        );
    }

    #[test]
    fn test_static_placement() {
        static SCRATCH: ScratchBuffers = ScratchBuffers::new();
        assert_eq!(SCRATCH.hex.capacity(), super::HEX_CAPACITY);
        assert_eq!(SCRATCH.decimal.capacity(), super::DECIMAL_CAPACITY);
        assert_eq!(SCRATCH.float.capacity(), super::FLOAT_CAPACITY);
    }
}
