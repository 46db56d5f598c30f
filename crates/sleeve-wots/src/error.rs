/// Error type for WOTS+ operations.
#[derive(Debug, thiserror::Error)]
pub enum WotsError {
    /// The numeric parameter-set encoding is out of range.
    #[error("invalid WOTS+ params encoding: {0}")]
    InvalidParamsEncoding(u8),
}
