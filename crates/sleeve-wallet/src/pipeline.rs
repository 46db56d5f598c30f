//! The generation pipeline shared by both constructions.
//!
//! mnemonic -> seed -> HD node at the quantum path -> WOTS+ seeds.
//! The constructions diverge only after this point.

use sleeve_primitives::{bip32, bip39};

use crate::spec::GenSpec;
use crate::WalletError;

/// Validate the mnemonic, derive the seed, and walk the quantum path.
///
/// Sleeve requires the full 32 bytes of entropy, so shorter phrases that
/// are otherwise valid BIP39 (12 to 21 words) are rejected here.
///
/// Returns the seed alongside the node so single-seed mode can keep
/// deriving classical keys from it.
pub(crate) fn quantum_node(
    mnemonic: &str,
    passphrase: &str,
    spec: &GenSpec,
) -> Result<([u8; bip39::SEED_SIZE], bip32::HdNode), WalletError> {
    let entropy = bip39::mnemonic_to_entropy(mnemonic)?;
    if entropy.len() != crate::ENTROPY_SIZE {
        return Err(WalletError::BadEntropySize { got: entropy.len() });
    }
    let path = spec.path_from_spec()?;
    let seed = bip39::mnemonic_to_seed(mnemonic, passphrase);
    let node = bip32::derive(&seed, &path)?;
    Ok((seed, node))
}

/// Read exactly 32 bytes of entropy from the injected source.
pub(crate) fn read_entropy<R: std::io::Read>(
    source: &mut R,
) -> Result<[u8; crate::ENTROPY_SIZE], WalletError> {
    let mut entropy = [0u8; crate::ENTROPY_SIZE];
    source.read_exact(&mut entropy)?;
    Ok(entropy)
}
