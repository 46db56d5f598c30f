//! The single-seed Sleeve construction.
//!
//! One phrase backs everything. The WOTS+ key lives at the fully hardened
//! quantum path; the classical keys live at
//! `m/44'/{coin}'/0'/0/{index}` where the final, non-hardened index is
//! the top 31 bits of `SHA3-256(WOTS_PK)`. Recovering the phrase
//! reproduces the index and with it every network key.

use std::collections::HashMap;

use zeroize::Zeroize;

use sleeve_primitives::bip32::{self, DerivationPath, HARDENED};
use sleeve_primitives::hash::sha3_256;
use sleeve_primitives::{bip39, PrimitivesError};
use sleeve_wots::Key;

use crate::network::{NetworkKey, STANDARD_NETWORKS};
use crate::pipeline::{quantum_node, read_entropy};
use crate::spec::{GenSpec, ENTROPY_SIZE};
use crate::WalletError;

/// A single-seed Sleeve wallet.
pub struct SingleSeedSleeve {
    mnemonic: String,
    wots_key: Key,
    wots_pk: [u8; 32],
    derivation_index: u32,
    network_keys: HashMap<String, NetworkKey>,
}

impl SingleSeedSleeve {
    /// Generate a new wallet from an entropy source.
    ///
    /// Reads exactly 32 bytes; a short read or I/O failure surfaces as
    /// `EntropyUnavailable`.
    pub fn new<R: std::io::Read>(
        entropy_source: &mut R,
        passphrase: &str,
        spec: GenSpec,
    ) -> Result<Self, WalletError> {
        let entropy = read_entropy(entropy_source)?;
        Self::from_entropy(&entropy, passphrase, spec)
    }

    /// Build a wallet from caller-supplied entropy.
    ///
    /// Sleeve accepts only 32-byte entropy (a 24-word phrase); anything
    /// else is `BadEntropySize`.
    pub fn from_entropy(
        entropy: &[u8],
        passphrase: &str,
        spec: GenSpec,
    ) -> Result<Self, WalletError> {
        if entropy.len() != ENTROPY_SIZE {
            return Err(WalletError::BadEntropySize { got: entropy.len() });
        }
        let mnemonic = bip39::entropy_to_mnemonic(entropy)?;
        Self::from_mnemonic(&mnemonic, passphrase, spec)
    }

    /// Recover a wallet from its phrase.
    ///
    /// Derives the WOTS+ key, the classical index, and the standard
    /// networks (Bitcoin, Ethereum, Polkadot). All-or-nothing: any
    /// failure returns no wallet.
    pub fn from_mnemonic(
        mnemonic: &str,
        passphrase: &str,
        spec: GenSpec,
    ) -> Result<Self, WalletError> {
        let (mut seed, node) = quantum_node(mnemonic, passphrase, &spec)?;

        let wots_key = Key::new_from_seed(spec.params(), *node.key(), *node.code());
        let wots_pk = wots_key.compute_pk();

        // The classical index is a pure function of the WOTS+ public key,
        // masked into non-hardened range.
        let pk_hash = sha3_256(&wots_pk);
        let derivation_index =
            u32::from_be_bytes([pk_hash[0], pk_hash[1], pk_hash[2], pk_hash[3]]) & 0x7FFF_FFFF;

        let mut sleeve = SingleSeedSleeve {
            mnemonic: mnemonic.to_string(),
            wots_key,
            wots_pk,
            derivation_index,
            network_keys: HashMap::new(),
        };
        for (network, coin_type) in STANDARD_NETWORKS {
            if let Err(e) = sleeve.derive_network_key(network, coin_type, &seed) {
                seed.zeroize();
                return Err(e);
            }
        }
        seed.zeroize();
        Ok(sleeve)
    }

    /// Derive and register the key for one network.
    ///
    /// Uses the path `m/44'/{coin_type}'/0'/0/{index}` with this wallet's
    /// derivation index. Idempotent per label: repeating a call overwrites
    /// the entry with an identical value.
    ///
    /// # Arguments
    /// * `network` - Label to register the key under.
    /// * `coin_type` - SLIP-44 coin type (must fit a hardened segment).
    /// * `seed` - The 64-byte wallet seed.
    pub fn derive_network_key(
        &mut self,
        network: &str,
        coin_type: u32,
        seed: &[u8],
    ) -> Result<(), WalletError> {
        if coin_type >= HARDENED {
            return Err(WalletError::Primitives(PrimitivesError::InvalidPath(
                format!("coin type {} out of range", coin_type),
            )));
        }
        let path = DerivationPath::new(vec![
            44 | HARDENED,
            coin_type | HARDENED,
            HARDENED,
            0,
            self.derivation_index,
        ]);
        let node = bip32::derive(seed, &path)?;
        self.network_keys.insert(
            network.to_string(),
            NetworkKey {
                network: network.to_string(),
                coin_type,
                path: path.to_string(),
                private_key: *node.key(),
            },
        );
        Ok(())
    }

    /// The recovery phrase (24 words, single-space separated).
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The compressed WOTS+ public key.
    pub fn wots_public_key(&self) -> &[u8; 32] {
        &self.wots_pk
    }

    /// The WOTS+ key, for re-verification via [`Key::compute_pk`].
    pub fn wots_key(&self) -> &Key {
        &self.wots_key
    }

    /// The non-hardened classical index, always below 2^31.
    pub fn derivation_index(&self) -> u32 {
        self.derivation_index
    }

    /// The private key registered for a network.
    ///
    /// # Returns
    /// The raw 32-byte key, or `UnknownNetwork` if the label was never
    /// derived.
    pub fn private_key(&self, network: &str) -> Result<[u8; 32], WalletError> {
        self.network_keys
            .get(network)
            .map(|k| k.private_key)
            .ok_or_else(|| WalletError::UnknownNetwork(network.to_string()))
    }

    /// A snapshot of every registered network key.
    pub fn all_network_keys(&self) -> HashMap<String, NetworkKey> {
        self.network_keys.clone()
    }
}
