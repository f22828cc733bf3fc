//! Packing of fixed-width integers and floats into caller-owned byte buffers.
//!
//! Only the unsigned widths touch bytes. Signed integers reinterpret their
//! two's complement bit pattern as the unsigned type of the same width, and
//! floats go through their IEEE-754 bit pattern; neither is a numeric
//! conversion.
//!
//! Every operation checks the buffer length first. On failure nothing is
//! written; on success exactly `T::SIZE` leading bytes are written and the
//! rest of the buffer is left alone.

use numconv_common::{Result, verify_buffer};

pub use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// A fixed-width value with a defined byte layout.
pub trait WireValue: Copy {
    const SIZE: usize;

    /// Writes the value into `dst`, which is exactly `SIZE` bytes long.
    fn write_to<O: ByteOrder>(self, dst: &mut [u8]);

    /// Reads the value from `src`, which is exactly `SIZE` bytes long.
    fn read_from<O: ByteOrder>(src: &[u8]) -> Self;
}

macro_rules! impl_wire_unsigned {
    ($T:ty, $write:ident, $read:ident) => {
        impl WireValue for $T {
            const SIZE: usize = core::mem::size_of::<$T>();

            #[inline]
            fn write_to<O: ByteOrder>(self, dst: &mut [u8]) {
                O::$write(dst, self);
            }

            #[inline]
            fn read_from<O: ByteOrder>(src: &[u8]) -> $T {
                O::$read(src)
            }
        }
    };
}

macro_rules! impl_wire_signed {
    ($T:ty, $U:ty) => {
        impl WireValue for $T {
            const SIZE: usize = <$U as WireValue>::SIZE;

            #[inline]
            fn write_to<O: ByteOrder>(self, dst: &mut [u8]) {
                (self as $U).write_to::<O>(dst);
            }

            #[inline]
            fn read_from<O: ByteOrder>(src: &[u8]) -> $T {
                <$U>::read_from::<O>(src) as $T
            }
        }
    };
}

macro_rules! impl_wire_float {
    ($T:ty, $U:ty) => {
        impl WireValue for $T {
            const SIZE: usize = <$U as WireValue>::SIZE;

            #[inline]
            fn write_to<O: ByteOrder>(self, dst: &mut [u8]) {
                self.to_bits().write_to::<O>(dst);
            }

            #[inline]
            fn read_from<O: ByteOrder>(src: &[u8]) -> $T {
                <$T>::from_bits(<$U>::read_from::<O>(src))
            }
        }
    };
}

impl_wire_unsigned!(u16, write_u16, read_u16);
impl_wire_unsigned!(u32, write_u32, read_u32);
impl_wire_unsigned!(u64, write_u64, read_u64);
impl_wire_signed!(i16, u16);
impl_wire_signed!(i32, u32);
impl_wire_signed!(i64, u64);
impl_wire_float!(f32, u32);
impl_wire_float!(f64, u64);

/// Writes `value` into the leading `T::SIZE` bytes of `dst` in byte order `O`.
pub fn encode<O: ByteOrder, T: WireValue>(value: T, dst: &mut [u8]) -> Result<()> {
    verify_buffer!(dst, T::SIZE);
    value.write_to::<O>(&mut dst[..T::SIZE]);
    Ok(())
}

/// Reads a `T` from the leading `T::SIZE` bytes of `src` in byte order `O`.
pub fn decode<O: ByteOrder, T: WireValue>(src: &[u8]) -> Result<T> {
    verify_buffer!(src, T::SIZE);
    Ok(T::read_from::<O>(&src[..T::SIZE]))
}

/// Byte order chosen at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Network byte order.
    pub const NETWORK: Endian = Endian::Big;

    pub fn encode<T: WireValue>(self, value: T, dst: &mut [u8]) -> Result<()> {
        match self {
            Endian::Big => encode::<BigEndian, T>(value, dst),
            Endian::Little => encode::<LittleEndian, T>(value, dst),
        }
    }

    pub fn decode<T: WireValue>(self, src: &[u8]) -> Result<T> {
        match self {
            Endian::Big => decode::<BigEndian, T>(src),
            Endian::Little => decode::<LittleEndian, T>(src),
        }
    }
}

macro_rules! named_codec {
    ($T:ty, $name:ident) => {
        paste::paste! {
            #[doc = concat!("Writes a big-endian `", stringify!($T), "` into `dst`.")]
            #[inline]
            pub fn [<$name _to_bytes>](value: $T, dst: &mut [u8]) -> Result<()> {
                encode::<BigEndian, $T>(value, dst)
            }

            #[doc = concat!("Writes a little-endian `", stringify!($T), "` into `dst`.")]
            #[inline]
            pub fn [<$name _to_bytes_le>](value: $T, dst: &mut [u8]) -> Result<()> {
                encode::<LittleEndian, $T>(value, dst)
            }

            #[doc = concat!("Reads a big-endian `", stringify!($T), "` from `src`.")]
            #[inline]
            pub fn [<bytes_to_ $name>](src: &[u8]) -> Result<$T> {
                decode::<BigEndian, $T>(src)
            }

            #[doc = concat!("Reads a little-endian `", stringify!($T), "` from `src`.")]
            #[inline]
            pub fn [<bytes_to_ $name _le>](src: &[u8]) -> Result<$T> {
                decode::<LittleEndian, $T>(src)
            }
        }
    };
}

named_codec!(u16, uint16);
named_codec!(i16, int16);
named_codec!(u32, uint32);
named_codec!(i32, int32);
named_codec!(u64, uint64);
named_codec!(i64, int64);
named_codec!(f32, float32);
named_codec!(f64, float64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_known_vectors() {
        let mut buf = [0u8; 2];
        uint16_to_bytes_le(0x1234, &mut buf).unwrap();
        assert_eq!(buf, [0x34, 0x12]);
        uint16_to_bytes(0x1234, &mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x34]);

        assert_eq!(bytes_to_uint32(&[0x00, 0x00, 0x01, 0x00]).unwrap(), 256);
        assert_eq!(bytes_to_uint32_le(&[0x00, 0x01, 0x00, 0x00]).unwrap(), 256);

        let mut buf = [0u8; 8];
        uint64_to_bytes(0x0102_0304_0506_0708, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
        uint64_to_bytes_le(0x0102_0304_0506_0708, &mut buf).unwrap();
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_signed_uses_twos_complement() {
        let mut buf = [0u8; 4];
        int16_to_bytes(-1, &mut buf).unwrap();
        assert_eq!(&buf[..2], &[0xFF, 0xFF]);
        int32_to_bytes(-2, &mut buf).unwrap();
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFE]);
        int32_to_bytes_le(i32::MIN, &mut buf).unwrap();
        assert_eq!(buf, [0x00, 0x00, 0x00, 0x80]);
        assert_eq!(bytes_to_int32_le(&buf).unwrap(), i32::MIN);
        assert_eq!(bytes_to_int64(&[0xFF; 8]).unwrap(), -1);
    }

    #[test]
    fn test_float_uses_bit_pattern() {
        let mut buf = [0u8; 8];
        float32_to_bytes(1.0, &mut buf).unwrap();
        assert_eq!(&buf[..4], &[0x3F, 0x80, 0x00, 0x00]);
        float64_to_bytes_le(-2.0, &mut buf).unwrap();
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0x00, 0xC0]);

        let nan = f64::from_bits(0x7FF8_0000_0000_0001);
        float64_to_bytes(nan, &mut buf).unwrap();
        assert_eq!(bytes_to_float64(&buf).unwrap().to_bits(), nan.to_bits());
    }

    #[test]
    fn test_short_buffer_is_untouched() {
        let mut buf = [0xAAu8; 3];
        assert_eq!(uint32_to_bytes(1, &mut buf), Err(Error::InvalidBufferSize));
        assert_eq!(float64_to_bytes_le(1.0, &mut buf), Err(Error::InvalidBufferSize));
        assert_eq!(buf, [0xAA; 3]);
        assert_eq!(bytes_to_uint64(&buf), Err(Error::InvalidBufferSize));
        assert_eq!(bytes_to_int16(&buf[..1]), Err(Error::InvalidBufferSize));
        assert_eq!(bytes_to_float32_le(&[]), Err(Error::InvalidBufferSize));
    }

    #[test]
    fn test_trailing_bytes_are_untouched() {
        let mut buf = [0xAAu8; 6];
        uint32_to_bytes_le(0x0403_0201, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 0xAA, 0xAA]);
        assert_eq!(bytes_to_uint16(&buf).unwrap(), 0x0102);
    }

    #[test]
    fn test_runtime_endian() {
        let mut buf = [0u8; 4];
        Endian::Big.encode(0x0A0B_0C0Du32, &mut buf).unwrap();
        assert_eq!(buf, [0x0A, 0x0B, 0x0C, 0x0D]);
        assert_eq!(Endian::Little.decode::<u32>(&buf).unwrap(), 0x0D0C_0B0A);
        assert_eq!(Endian::NETWORK, Endian::Big);
        assert_eq!(
            Endian::NATIVE.decode::<u32>(&0x0102_0304u32.to_ne_bytes()).unwrap(),
            0x0102_0304
        );
    }
}
