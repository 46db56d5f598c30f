//! BIP44 network registry.
//!
//! Maps network labels to their SLIP-44 coin type and the private key
//! derived for them. Coin-type constants cover the standard trio plus the
//! commonly requested extras.

use zeroize::Zeroize;

/// Bitcoin coin type.
pub const COIN_TYPE_BITCOIN: u32 = 0;
/// Litecoin coin type.
pub const COIN_TYPE_LITECOIN: u32 = 2;
/// Dogecoin coin type.
pub const COIN_TYPE_DOGECOIN: u32 = 3;
/// Ethereum coin type.
pub const COIN_TYPE_ETHEREUM: u32 = 60;
/// Cosmos coin type.
pub const COIN_TYPE_COSMOS: u32 = 118;
/// Polkadot coin type.
pub const COIN_TYPE_POLKADOT: u32 = 354;
/// Solana coin type.
pub const COIN_TYPE_SOLANA: u32 = 501;
/// Cardano coin type.
pub const COIN_TYPE_CARDANO: u32 = 1815;

/// Networks every fresh single-seed sleeve derives eagerly.
pub const STANDARD_NETWORKS: [(&str, u32); 3] = [
    ("Bitcoin", COIN_TYPE_BITCOIN),
    ("Ethereum", COIN_TYPE_ETHEREUM),
    ("Polkadot", COIN_TYPE_POLKADOT),
];

/// A private key derived for one network.
///
/// The private key is zeroised when the entry is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkKey {
    /// Network label the key was derived for.
    pub network: String,
    /// SLIP-44 coin type in the derivation path.
    pub coin_type: u32,
    /// Canonical string form of the derivation path.
    pub path: String,
    /// The raw 32-byte private key.
    pub private_key: [u8; 32],
}

impl Drop for NetworkKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl std::fmt::Debug for NetworkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Redact the key itself.
        f.debug_struct("NetworkKey")
            .field("network", &self.network)
            .field("coin_type", &self.coin_type)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
