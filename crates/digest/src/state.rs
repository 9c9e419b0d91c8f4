/// The five-word running accumulator advanced by the compression step.
///
/// Every digest call starts from [`State::new`] and owns its state for the
/// duration of the call; nothing survives between calls. Compression
/// implementations read the words with [`words`](Self::words) and write
/// them back with [`set_words`](Self::set_words).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct State {
    words: [u32; 5],
}

impl State {
    /// Number of 32-bit words held by the accumulator.
    pub const WORD_COUNT: usize = 5;

    /// Fixed initial chaining values.
    const INIT: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

    /// Creates an accumulator holding the fixed initial values.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Self::INIT }
    }

    /// Returns a copy of the five state words.
    #[must_use]
    pub const fn words(&self) -> [u32; 5] {
        self.words
    }

    /// Replaces all five state words.
    pub fn set_words(&mut self, words: [u32; 5]) {
        self.words = words;
    }

    /// Serializes the state most-significant byte first.
    #[must_use]
    pub(crate) fn to_be_bytes(self) -> [u8; 20] {
        let mut out = [0u8; 20];
        for (slot, word) in out.chunks_exact_mut(4).zip(self.words) {
            slot.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
