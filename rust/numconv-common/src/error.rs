use thiserror::Error;

/// Numeric code reported for a successful operation.
pub const NO_ERROR: u16 = 0;

/// First code of the conversion engine's error block.
pub const ERROR_CODE_START: u16 = 4000;

/// Failure of a conversion call.
///
/// The set is closed and carries no payload, so it stays `Copy` and can be
/// matched exhaustively at the call site. Every variant also has a stable
/// numeric code (see [`Error::code`]) for callers that report plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u16)]
pub enum Error {
    /// A destination or source buffer is smaller than the encoded width.
    #[error("buffer is smaller than the encoded width")]
    InvalidBufferSize = ERROR_CODE_START,

    /// The requested fractional precision does not fit in the float buffer.
    #[error("too many fractional digits requested for the float buffer")]
    TooMuchPrecisionForFloat = ERROR_CODE_START + 1,
}

impl Error {
    /// Returns the numeric code of this error.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Maps a numeric code back to its error, if it names one.
    pub const fn from_code(code: u16) -> Option<Error> {
        match code {
            c if c == Error::InvalidBufferSize as u16 => Some(Error::InvalidBufferSize),
            c if c == Error::TooMuchPrecisionForFloat as u16 => {
                Some(Error::TooMuchPrecisionForFloat)
            }
            _ => None,
        }
    }
}

/// Flattens a result into its numeric code, [`NO_ERROR`] on success.
#[inline]
pub fn error_code<T>(result: &crate::Result<T>) -> u16 {
    match result {
        Ok(_) => NO_ERROR,
        Err(e) => e.code(),
    }
}
