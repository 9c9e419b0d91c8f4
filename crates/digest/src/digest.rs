use core::fmt;

/// Fixed-length digest output: the five state words serialized
/// most-significant byte first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Digest {
    bytes: [u8; Self::LEN],
}

impl Digest {
    /// Number of bytes in every digest.
    pub const LEN: usize = 20;

    pub(crate) const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self { bytes }
    }

    /// Returns the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.bytes
    }

    /// Consumes the digest and returns the raw byte array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; Self::LEN] {
        self.bytes
    }

    /// Reconstructs a digest from a byte slice of exactly [`Digest::LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DigestSliceError> {
        let bytes: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| DigestSliceError { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Renders the digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        use fmt::Write as _;

        let mut out = String::with_capacity(Self::LEN * 2);
        for byte in self.bytes {
            write!(&mut out, "{byte:02x}").expect("write! to String cannot fail");
        }
        out
    }

    /// Renders the digest as a 20-character string over the single-byte
    /// alphabet, one character per digest byte.
    #[must_use]
    pub fn to_latin1_string(&self) -> String {
        self.bytes
            .iter()
            .map(|&byte| {
                framehash_codec::byte_to_char(u32::from(byte))
                    .expect("digest bytes are always within the alphabet")
            })
            .collect()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Digest> for [u8; Digest::LEN] {
    fn from(digest: Digest) -> Self {
        digest.into_bytes()
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = DigestSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

/// Error returned when reconstructing a digest from a slice of the wrong length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigestSliceError {
    len: usize,
}

impl DigestSliceError {
    /// Number of bytes the caller supplied when the error was raised.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the provided slice was empty when the error occurred.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for DigestSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digest requires {} bytes, received {}", Digest::LEN, self.len)
    }
}

impl std::error::Error for DigestSliceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rendering_matches_display() {
        let digest = Digest::new([0xA9; Digest::LEN]);
        assert_eq!(digest.to_hex(), digest.to_string());
        assert_eq!(digest.to_hex().len(), 40);
    }

    #[test]
    fn latin1_rendering_is_one_char_per_byte() {
        let mut bytes = [0u8; Digest::LEN];
        bytes[0] = b'a';
        bytes[19] = 0xFF;
        let rendered = Digest::new(bytes).to_latin1_string();
        assert_eq!(rendered.chars().count(), Digest::LEN);
        assert_eq!(rendered.chars().next(), Some('a'));
        assert_eq!(rendered.chars().next_back(), Some('\u{ff}'));
    }

    #[test]
    fn slice_reconstruction_validates_length() {
        let bytes = [7u8; Digest::LEN];
        assert_eq!(Digest::from_slice(&bytes).unwrap().as_bytes(), &bytes);

        let err = Digest::from_slice(&bytes[..19]).unwrap_err();
        assert_eq!(err.len(), 19);
        assert!(!err.is_empty());
        assert!(Digest::from_slice(&[]).unwrap_err().is_empty());
    }
}
