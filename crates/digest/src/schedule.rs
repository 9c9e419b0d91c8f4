/// Number of bytes in one message block.
pub const BLOCK_LEN: usize = 64;

/// The sixteen 32-bit words derived from one 64-byte block.
///
/// Rebuilt for every block by packing four consecutive message bytes
/// big-endian into each slot. A fixed-size array keeps indexing strictly
/// integer-based; there is no dynamically growable backing store.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Schedule {
    words: [u32; Self::WORD_COUNT],
}

impl Schedule {
    /// Number of words packed from each block.
    pub const WORD_COUNT: usize = 16;

    /// Packs a 64-byte block into sixteen big-endian words.
    #[must_use]
    pub fn from_block(block: &[u8; BLOCK_LEN]) -> Self {
        let mut words = [0u32; Self::WORD_COUNT];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    /// Returns the packed words.
    #[must_use]
    pub const fn words(&self) -> &[u32; Self::WORD_COUNT] {
        &self.words
    }
}
