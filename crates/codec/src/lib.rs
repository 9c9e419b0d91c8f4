#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use thiserror::Error;

/// Largest code point representable in the digest's single-byte alphabet.
pub const MAX_BYTE_VALUE: u32 = 255;

/// Errors raised when a value falls outside the single-byte alphabet.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// The input was not exactly one character long.
    #[error("expected exactly one character, found {len}")]
    NotSingleCharacter {
        /// Number of characters the caller supplied.
        len: usize,
    },
    /// The character's code point lies above `U+00FF`.
    #[error("character {ch:?} is outside the single-byte alphabet")]
    CharacterOutOfRange {
        /// Offending character.
        ch: char,
    },
    /// The numeric value lies outside `0..=255`.
    #[error("byte value {value} is outside 0..=255")]
    ValueOutOfRange {
        /// Offending value.
        value: u32,
    },
}

/// Converts a one-character string into its byte value.
///
/// `text` must contain exactly one character with a code point in
/// `0..=255`; anything else fails without producing a value.
///
/// # Examples
///
/// ```
/// use framehash_codec::char_to_byte;
///
/// assert_eq!(char_to_byte("\u{80}").unwrap(), 0x80);
/// assert!(char_to_byte("ab").is_err());
/// ```
pub fn char_to_byte(text: &str) -> Result<u8, CodecError> {
    let mut chars = text.chars();
    let ch = chars.next().ok_or(CodecError::NotSingleCharacter { len: 0 })?;
    let extra = chars.count();
    if extra != 0 {
        return Err(CodecError::NotSingleCharacter { len: extra + 1 });
    }

    let code = u32::from(ch);
    if code > MAX_BYTE_VALUE {
        return Err(CodecError::CharacterOutOfRange { ch });
    }
    Ok(code as u8)
}

/// Converts a byte value into its one-character equivalent.
///
/// # Examples
///
/// ```
/// use framehash_codec::byte_to_char;
///
/// assert_eq!(byte_to_char(0).unwrap(), '\0');
/// assert!(byte_to_char(256).is_err());
/// ```
pub fn byte_to_char(value: u32) -> Result<char, CodecError> {
    if value > MAX_BYTE_VALUE {
        return Err(CodecError::ValueOutOfRange { value });
    }
    // Every value in 0..=255 is a valid scalar, so the conversion is total.
    Ok(char::from(value as u8))
}
