/// Error types for wallet construction and the network registry.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The injected entropy source failed or returned a short read.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] std::io::Error),

    /// Sleeve requires exactly 32 bytes of entropy (a 24-word phrase).
    #[error("invalid entropy size for sleeve: {got} bytes, want 32")]
    BadEntropySize {
        /// Length supplied by the caller, in bytes.
        got: usize,
    },

    /// The account number does not fit a hardened path segment.
    #[error("account number too large: {0}")]
    AccountTooLarge(u32),

    /// An error from the WOTS+ engine.
    #[error("wots error: {0}")]
    Wots(#[from] sleeve_wots::WotsError),

    /// An error from the mnemonic codec or HD derivation.
    #[error("primitives error: {0}")]
    Primitives(#[from] sleeve_primitives::PrimitivesError),

    /// The requested network is not in the registry.
    #[error("unknown network: {0:?}")]
    UnknownNetwork(String),
}
