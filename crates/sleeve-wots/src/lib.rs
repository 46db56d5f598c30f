/// Sleeve SDK - WOTS+ one-time signature key generation.
///
/// Implements the Winternitz one-time signature (plus variant) parameter
/// families and deterministic key generation: secret chains are expanded
/// from a 32-byte seed with a keyed PRF, walked to their endpoints with
/// the chaining function, and compressed to a single 32-byte public key.
/// Signing is intentionally not provided; Sleeve only ever generates keys.

mod error;
mod key;
mod params;

pub use error::WotsError;
pub use key::Key;
pub use params::{Params, ParamsEncoding, DEFAULT_PARAMS, N};
