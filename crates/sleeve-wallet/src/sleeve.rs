//! The dual-mnemonic Sleeve construction.
//!
//! The quantum phrase seeds a WOTS+ key at the hardened quantum path; the
//! classical wallet is a second phrase encoding
//! `SHA3-256(sk_sleeve || WOTS_PK)`, importable into any BIP39 wallet.
//! Holding the quantum phrase is sufficient to recompute the classical
//! one, and spending the WOTS+ key later proves ownership of both.

use zeroize::Zeroize;

use sleeve_primitives::bip39;
use sleeve_primitives::hash::sha3_256;
use sleeve_wots::Key;

use crate::pipeline::{quantum_node, read_entropy};
use crate::spec::{GenSpec, ENTROPY_SIZE};
use crate::WalletError;

/// A dual-mnemonic Sleeve wallet.
pub struct Sleeve {
    mnemonic: String,
    output_mnemonic: String,
    wots_key: Key,
    wots_pk: [u8; 32],
}

impl Sleeve {
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

    /// Recover a wallet from its quantum phrase.
    pub fn from_mnemonic(
        mnemonic: &str,
        passphrase: &str,
        spec: GenSpec,
    ) -> Result<Self, WalletError> {
        let (mut seed, node) = quantum_node(mnemonic, passphrase, &spec)?;
        seed.zeroize(); // dual mode derives nothing further from the seed

        let wots_key = Key::new_from_seed(spec.params(), *node.key(), *node.code());
        let wots_pk = wots_key.compute_pk();

        // Bind the classical wallet to the quantum key:
        // out_entropy = SHA3-256(sk_sleeve || WOTS_PK).
        let mut binding = Vec::with_capacity(64);
        binding.extend_from_slice(node.key());
        binding.extend_from_slice(&wots_pk);
        let out_entropy = sha3_256(&binding);
        binding.zeroize();

        let output_mnemonic = bip39::entropy_to_mnemonic(&out_entropy)?;

        Ok(Sleeve {
            mnemonic: mnemonic.to_string(),
            output_mnemonic,
            wots_key,
            wots_pk,
        })
    }

    /// The quantum recovery phrase (24 words, single-space separated).
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The classical recovery phrase derived from the binding hash.
    pub fn output_mnemonic(&self) -> &str {
        &self.output_mnemonic
    }

    /// The compressed WOTS+ public key.
    pub fn wots_public_key(&self) -> &[u8; 32] {
        &self.wots_pk
    }

    /// The WOTS+ key, for re-verification via [`Key::compute_pk`].
    pub fn wots_key(&self) -> &Key {
        &self.wots_key
    }
}
