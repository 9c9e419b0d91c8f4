//! Message padding.
//!
//! The padded buffer is the message followed by a single `0x80` sentinel,
//! zero bytes until the length is congruent to 56 mod 64, and the 8-byte
//! big-endian bit length of the original message. The result is always a
//! whole number of 64-byte blocks.

use crate::schedule::BLOCK_LEN;

/// Offset within the final block where the encoded bit length begins.
const LENGTH_OFFSET: usize = 56;

/// Extends `message` into a whole number of 64-byte blocks.
pub(crate) fn pad(message: &[u8]) -> Vec<u8> {
    // The sentinel plus the 8-byte length always fit after rounding up.
    let framed_len = message.len() + 1 + 8;
    let padded_len = framed_len.div_ceil(BLOCK_LEN) * BLOCK_LEN;

    let mut buffer = Vec::with_capacity(padded_len);
    buffer.extend_from_slice(message);
    buffer.push(0x80);
    buffer.resize(padded_len - 8, 0);

    let bit_len = (message.len() as u64) << 3;
    buffer.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(buffer.len() % BLOCK_LEN, 0);
    buffer
}
