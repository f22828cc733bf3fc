//! Heap-free conversion of numbers to ASCII text and to fixed-width bytes.
//!
//! Text encoders write into fixed-capacity scratch buffers owned by a
//! [`ScratchBuffers`] set and hand back an [`AsciiView`] borrowed from the
//! buffer that produced it. The borrow keeps a view alive only until the next
//! call into the same buffer family. The byte-order codec writes into and
//! reads from caller-owned slices instead.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod byte_order;
pub mod decimal;
pub mod float;
pub mod hex;
pub mod scratch;
pub mod symbols;
pub mod view;

pub use byte_order::{BigEndian, Endian, LittleEndian, WireValue};
pub use decimal::DecimalBuffer;
pub use float::FloatBuffer;
pub use hex::HexBuffer;
pub use numconv_common::Result;
pub use numconv_common::error::{Error, NO_ERROR, error_code};
pub use scratch::ScratchBuffers;
pub use view::AsciiView;
