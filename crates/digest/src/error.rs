use framehash_codec::CodecError;
use thiserror::Error;

/// Errors raised while assembling an engine or digesting a message.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DigestError {
    /// The input contained a character the single-byte alphabet cannot
    /// represent. No blocks are compressed and no output is produced.
    #[error("input character at index {index} cannot be encoded: {source}")]
    UnsupportedCharacter {
        /// Zero-based character position within the input.
        index: usize,
        /// The underlying codec failure.
        source: CodecError,
    },
    /// The builder finished without a compression function. Fatal at
    /// construction time; retrying cannot succeed.
    #[error("digest engine built without a compression function")]
    CompressionNotBound,
}
