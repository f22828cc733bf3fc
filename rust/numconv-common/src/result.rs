pub type Result<T> = core::result::Result<T, crate::error::Error>;

/// Fails with [`InvalidBufferSize`](crate::error::Error::InvalidBufferSize)
/// when the buffer expression is shorter than `$required` bytes.
#[macro_export]
macro_rules! verify_buffer {
    ($buf:expr, $required:expr) => {{
        $crate::result::verify_buffer($buf.len(), $required)?;
    }};
}

/// Fails with
/// [`TooMuchPrecisionForFloat`](crate::error::Error::TooMuchPrecisionForFloat)
/// when a float rendering of `$requested` bytes does not fit in `$available`.
#[macro_export]
macro_rules! verify_precision {
    ($requested:expr, $available:expr) => {{
        $crate::result::verify_precision($requested, $available)?;
    }};
}

#[inline]
pub fn verify_buffer(len: usize, required: usize) -> Result<()> {
    if len >= required {
        Ok(())
    } else {
        buffer_too_small(len, required)
    }
}

#[inline]
pub fn verify_precision(requested: usize, available: usize) -> Result<()> {
    if requested <= available {
        Ok(())
    } else {
        too_much_precision(requested, available)
    }
}

#[cold]
pub fn buffer_too_small(len: usize, required: usize) -> Result<()> {
    #[cfg(feature = "log")]
    log::debug!("buffer of {len} bytes rejected, {required} required");
    #[cfg(not(feature = "log"))]
    let _ = (len, required);
    Err(crate::error::Error::InvalidBufferSize)
}

#[cold]
pub fn too_much_precision(requested: usize, available: usize) -> Result<()> {
    #[cfg(feature = "log")]
    log::debug!("float rendering needs {requested} bytes, {available} available");
    #[cfg(not(feature = "log"))]
    let _ = (requested, available);
    Err(crate::error::Error::TooMuchPrecisionForFloat)
}
