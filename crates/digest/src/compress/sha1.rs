use super::Compress;
use crate::schedule::Schedule;
use crate::state::State;

/// The standard SHA-1 compression function.
///
/// Expands the 16-word schedule to 80 words, runs the four 20-round
/// stages, and feeds the result forward into the state with wrapping
/// addition. This is the engine's default capability.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sha1Compress;

impl Compress for Sha1Compress {
    fn compress(&self, state: &mut State, schedule: &Schedule) {
        let mut w = [0u32; 80];
        w[..16].copy_from_slice(schedule.words());
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = state.words();

        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                0..=19 => ((b & c) | (!b & d), 0x5A82_7999),
                20..=39 => (b ^ c ^ d, 0x6ED9_EBA1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1B_BCDC),
                _ => (b ^ c ^ d, 0xCA62_C1D6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        let [h0, h1, h2, h3, h4] = state.words();
        state.set_words([
            h0.wrapping_add(a),
            h1.wrapping_add(b),
            h2.wrapping_add(c),
            h3.wrapping_add(d),
            h4.wrapping_add(e),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One compressed all-zero block with a 0x80 sentinel is exactly the
    // padded empty message, so the state must serialize to the empty-input
    // SHA-1 value.
    #[test]
    fn compressing_the_padded_empty_message_yields_the_known_state() {
        let mut block = [0u8; 64];
        block[0] = 0x80;

        let mut state = State::new();
        Sha1Compress.compress(&mut state, &Schedule::from_block(&block));

        assert_eq!(
            state.words(),
            [0xDA39_A3EE, 0x5E6B_4B0D, 0x3255_BFEF, 0x9560_1890, 0xAFD8_0709]
        );
    }

    #[test]
    fn compression_depends_on_the_schedule() {
        let mut zeroed = State::new();
        Sha1Compress.compress(&mut zeroed, &Schedule::from_block(&[0u8; 64]));

        let mut filled = State::new();
        Sha1Compress.compress(&mut filled, &Schedule::from_block(&[1u8; 64]));

        assert_ne!(zeroed, filled);
    }
}
