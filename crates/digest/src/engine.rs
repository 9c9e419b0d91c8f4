use tracing::trace;

use crate::compress::{Compress, Sha1Compress};
use crate::digest::Digest;
use crate::error::DigestError;
use crate::padding::pad;
use crate::schedule::{BLOCK_LEN, Schedule};
use crate::state::State;

/// The digest engine: padding, block framing, and serialization around a
/// compression capability bound once at construction.
///
/// The capability is held in a private field with no mutable accessor, so
/// nothing constructed afterwards can change the behavior of an existing
/// engine. Each [`digest`](Self::digest) call allocates its own state and
/// message buffer, which makes shared references safe to use from any
/// number of threads at once.
pub struct DigestEngine {
    compress: Box<dyn Compress + Send + Sync>,
}

impl DigestEngine {
    /// Creates an engine bound to the given compression capability.
    pub fn new<C>(compress: C) -> Self
    where
        C: Compress + Send + Sync + 'static,
    {
        Self {
            compress: Box::new(compress),
        }
    }

    /// Starts assembling an engine whose capability is supplied separately.
    #[must_use]
    pub fn builder() -> DigestEngineBuilder {
        DigestEngineBuilder::new()
    }

    /// Digests `input` into a fixed 20-byte output.
    ///
    /// Every character must belong to the single-byte alphabet
    /// (`U+0000..=U+00FF`); the first character outside it fails the call
    /// with [`DigestError::UnsupportedCharacter`] before any block is
    /// compressed.
    pub fn digest(&self, input: &str) -> Result<Digest, DigestError> {
        let message = encode_message(input)?;
        let buffer = pad(&message);

        trace!(
            message_len = message.len(),
            blocks = buffer.len() / BLOCK_LEN,
            "digesting message"
        );

        let mut state = State::new();
        for block in buffer.chunks_exact(BLOCK_LEN) {
            let block: &[u8; BLOCK_LEN] = block.try_into().expect("chunks_exact yields full blocks");
            let schedule = Schedule::from_block(block);
            self.compress.compress(&mut state, &schedule);
        }

        Ok(Digest::new(state.to_be_bytes()))
    }
}

impl Default for DigestEngine {
    /// An engine bound to the standard SHA-1 compression.
    fn default() -> Self {
        Self::new(Sha1Compress)
    }
}

impl core::fmt::Debug for DigestEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DigestEngine").finish_non_exhaustive()
    }
}

/// Assembles a [`DigestEngine`], failing if no capability was supplied.
#[derive(Default)]
pub struct DigestEngineBuilder {
    compress: Option<Box<dyn Compress + Send + Sync>>,
}

impl DigestEngineBuilder {
    /// Creates a builder with no capability bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the compression capability.
    #[must_use]
    pub fn compression<C>(mut self, compress: C) -> Self
    where
        C: Compress + Send + Sync + 'static,
    {
        self.compress = Some(Box::new(compress));
        self
    }

    /// Finishes the engine.
    ///
    /// Fails with [`DigestError::CompressionNotBound`] when no capability
    /// was supplied; the error is not recoverable by retrying the build.
    pub fn build(self) -> Result<DigestEngine, DigestError> {
        let compress = self.compress.ok_or(DigestError::CompressionNotBound)?;
        Ok(DigestEngine { compress })
    }
}

impl core::fmt::Debug for DigestEngineBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DigestEngineBuilder")
            .field("bound", &self.compress.is_some())
            .finish()
    }
}

/// Encodes every input character through the byte codec.
fn encode_message(input: &str) -> Result<Vec<u8>, DigestError> {
    let mut message = Vec::with_capacity(input.len());
    let mut utf8 = [0u8; 4];
    for (index, ch) in input.chars().enumerate() {
        let byte = framehash_codec::char_to_byte(ch.encode_utf8(&mut utf8))
            .map_err(|source| DigestError::UnsupportedCharacter { index, source })?;
        message.push(byte);
    }
    Ok(message)
}
