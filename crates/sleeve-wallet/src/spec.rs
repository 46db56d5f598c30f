//! Generation parameters and the quantum derivation path.

use sleeve_primitives::bip32::{DerivationPath, HARDENED};
use sleeve_wots::{ParamsEncoding, DEFAULT_PARAMS};

use crate::WalletError;

/// Entropy size Sleeve accepts: 32 bytes, a 24-word phrase.
pub const ENTROPY_SIZE: usize = 32;

/// SLIP-44 coin type reserved for the quantum identity path.
pub const QUANTUM_COIN_TYPE: u32 = 1955;

/// Immutable parameters of one wallet generation.
///
/// Selects the hardened account under the quantum path and the WOTS+
/// security level. All generation state lives here; there is no
/// package-level configuration.
#[derive(Clone, Copy, Debug)]
pub struct GenSpec {
    account: u32,
    params: ParamsEncoding,
}

impl GenSpec {
    /// Build a spec for the given account and WOTS+ level.
    pub fn new(account: u32, params: ParamsEncoding) -> Self {
        GenSpec { account, params }
    }

    /// The account number under the quantum path.
    pub fn account(&self) -> u32 {
        self.account
    }

    /// The WOTS+ parameter set.
    pub fn params(&self) -> ParamsEncoding {
        self.params
    }

    /// The quantum derivation path `m/44'/1955'/{account}'/0'/0'`.
    ///
    /// Every segment is hardened, so the WOTS+ seed material can never be
    /// reached from an extended public key.
    ///
    /// # Returns
    /// The path, or `AccountTooLarge` if the account does not fit a
    /// hardened segment.
    pub fn path_from_spec(&self) -> Result<DerivationPath, WalletError> {
        if self.account >= HARDENED {
            return Err(WalletError::AccountTooLarge(self.account));
        }
        Ok(DerivationPath::new(vec![
            44 | HARDENED,
            QUANTUM_COIN_TYPE | HARDENED,
            self.account | HARDENED,
            HARDENED,
            HARDENED,
        ]))
    }
}

impl Default for GenSpec {
    /// Account 0 with the default WOTS+ level.
    fn default() -> Self {
        GenSpec::new(0, DEFAULT_PARAMS)
    }
}
