/// Unified error type for all primitives operations.
///
/// Covers errors from the mnemonic codec and hierarchical key derivation.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// Entropy length is not one of the sizes BIP39 permits.
    #[error("invalid entropy size: {got} bytes")]
    BadEntropySize {
        /// Length supplied by the caller, in bytes.
        got: usize,
    },

    /// Mnemonic word count is not one of {12, 15, 18, 21, 24}.
    #[error("invalid mnemonic length: {got} words")]
    BadWordCount {
        /// Number of words in the supplied phrase.
        got: usize,
    },

    /// A mnemonic word is not in the English word list.
    #[error("unknown mnemonic word: {0:?}")]
    UnknownWord(String),

    /// The mnemonic checksum bits did not match the entropy.
    #[error("mnemonic checksum mismatch")]
    ChecksumMismatch,

    /// HMAC of the seed produced an out-of-range master key.
    #[error("seed produces an invalid master key")]
    InvalidMasterKey,

    /// Child derivation failed to find a valid key after retries.
    #[error("child key derivation failed")]
    DerivationFailure,

    /// A derivation path string could not be parsed.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
}
