use core::fmt;
use core::ops::Deref;

/// Non-owning view of the ASCII bytes an encoder just wrote.
///
/// The view borrows the scratch buffer that produced it, so the buffer cannot
/// be written again while the view is alive. Copy the bytes out before the
/// next call into the same buffer family.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiView<'a>(&'a [u8]);

impl<'a> AsciiView<'a> {
    #[inline]
    pub(crate) fn new(bytes: &'a [u8]) -> AsciiView<'a> {
        AsciiView(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the view as a string slice.
    ///
    /// Encoders only write ASCII glyphs, so this never falls back to the
    /// empty string in practice.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        core::str::from_utf8(self.0).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for AsciiView<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl AsRef<[u8]> for AsciiView<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl fmt::Display for AsciiView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for AsciiView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl PartialEq<str> for AsciiView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for AsciiView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for AsciiView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::AsciiView;
    use std::string::ToString;

    #[test]
    fn test_view_accessors() {
        let view = AsciiView::new(b"-42");
        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.as_str(), "-42");
        assert_eq!(view, "-42");
        assert_eq!(view, b"-42"[..]);
        assert_eq!(view.to_string(), "-42");
        assert_eq!(&view[1..], b"42");
        assert!(AsciiView::new(b"").is_empty());
    }
}
