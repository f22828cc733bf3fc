//! Fixed-width uppercase hexadecimal rendering of unsigned integers.

use crate::{scratch::HEX_CAPACITY, symbols::HEX_DIGITS, view::AsciiView};

/// Unsigned integer widths the hex encoder renders.
pub trait HexWidth: Copy {
    const BITS: u32;
    /// Number of digits produced, one per nibble.
    const DIGITS: usize = (Self::BITS / 4) as usize;

    fn widen(self) -> u64;
}

macro_rules! impl_hex_width {
    ($T:ty) => {
        impl HexWidth for $T {
            const BITS: u32 = <$T>::BITS;

            #[inline]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_hex_width!(u8);
impl_hex_width!(u16);
impl_hex_width!(u32);
impl_hex_width!(u64);

/// Returns the alphabet index of the hex digit at position `pos` of a
/// `bits`-wide value, counting from the most significant digit.
///
/// Returns `None` when `pos` is past the last digit of that width.
#[inline]
pub fn hex_index(value: u64, bits: u32, pos: usize) -> Option<usize> {
    let digits = (bits / 4) as usize;
    if pos >= digits {
        return None;
    }
    let shift = (digits - 1 - pos) * 4;
    Some(((value >> shift) & 0x0F) as usize)
}

/// Scratch buffer of the hex family.
#[derive(Debug, Clone)]
pub struct HexBuffer {
    buf: [u8; HEX_CAPACITY],
}

impl HexBuffer {
    pub const fn new() -> HexBuffer {
        HexBuffer {
            buf: [0; HEX_CAPACITY],
        }
    }

    pub const fn capacity(&self) -> usize {
        HEX_CAPACITY
    }

    /// Renders `value` as exactly `T::DIGITS` uppercase digits, most
    /// significant first. Leading zeros are kept.
    pub fn encode<T: HexWidth>(&mut self, value: T) -> AsciiView<'_> {
        let value = value.widen();
        for (pos, slot) in self.buf[..T::DIGITS].iter_mut().enumerate() {
            if let Some(index) = hex_index(value, T::BITS, pos) {
                *slot = HEX_DIGITS[index];
            }
        }
        AsciiView::new(&self.buf[..T::DIGITS])
    }

    pub fn uint8(&mut self, value: u8) -> AsciiView<'_> {
        self.encode(value)
    }

    pub fn uint16(&mut self, value: u16) -> AsciiView<'_> {
        self.encode(value)
    }

    pub fn uint32(&mut self, value: u32) -> AsciiView<'_> {
        self.encode(value)
    }

    pub fn uint64(&mut self, value: u64) -> AsciiView<'_> {
        self.encode(value)
    }
}

impl Default for HexBuffer {
    fn default() -> Self {
        Self::new()
    }
}
