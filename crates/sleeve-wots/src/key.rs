//! WOTS+ key generation.

use sha3::{Digest, Sha3_256};
use zeroize::Zeroize;

use crate::params::{Params, ParamsEncoding, N};

/// A WOTS+ key pair, held as the seeds it is expanded from.
///
/// The full secret chain of `len` 32-byte blocks is derived on demand
/// from `secret_seed` with a keyed PRF; only the compressed public key
/// ever leaves this type. The secret seed is zeroised on drop.
pub struct Key {
    params: Params,
    secret_seed: [u8; N],
    public_seed: [u8; N],
}

impl Key {
    /// Build a key from its seeds and a parameter set.
    ///
    /// # Arguments
    /// * `encoding` - The parameter set to expand the key under.
    /// * `secret_seed` - 32-byte secret seed for the chain PRF.
    /// * `public_seed` - 32-byte public seed keying the chain function.
    pub fn new_from_seed(
        encoding: ParamsEncoding,
        secret_seed: [u8; N],
        public_seed: [u8; N],
    ) -> Self {
        Key {
            params: encoding.params(),
            secret_seed,
            public_seed,
        }
    }

    /// The parameter set this key was expanded under.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The public seed keying the chain function.
    pub fn public_seed(&self) -> &[u8; N] {
        &self.public_seed
    }

    /// Compute the compressed 32-byte public key.
    ///
    /// Walks every chain to its endpoint (`w - 1` applications of the
    /// chaining function from the PRF-derived secret block) and folds the
    /// endpoints pairwise until a single root remains. Deterministic:
    /// repeat calls return the same value.
    pub fn compute_pk(&self) -> [u8; N] {
        let mut endpoints = Vec::with_capacity(self.params.len);
        for i in 0..self.params.len as u32 {
            let mut block = self.secret_block(i);
            for j in 0..self.params.w - 1 {
                block = self.chain_step(i, j, &block);
            }
            endpoints.push(block);
        }
        compress(endpoints)
    }

    /// PRF: `sk_i = SHA3-256(secret_seed || ser32(i))`.
    fn secret_block(&self, i: u32) -> [u8; N] {
        let mut hasher = Sha3_256::new();
        hasher.update(self.secret_seed);
        hasher.update(i.to_be_bytes());
        hasher.finalize().into()
    }

    /// One chain step: `SHA3-256(public_seed || ser32(i) || ser32(j) || x)`.
    ///
    /// The chain index `i` and position `j` make every hash invocation
    /// address-distinct across the whole key.
    fn chain_step(&self, i: u32, j: u32, x: &[u8; N]) -> [u8; N] {
        let mut hasher = Sha3_256::new();
        hasher.update(self.public_seed);
        hasher.update(i.to_be_bytes());
        hasher.update(j.to_be_bytes());
        hasher.update(x);
        hasher.finalize().into()
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.secret_seed.zeroize();
    }
}

/// Fold chain endpoints pairwise (`SHA3-256(left || right)`), promoting an
/// odd trailing node, until a single 32-byte root remains.
fn compress(mut blocks: Vec<[u8; N]>) -> [u8; N] {
    while blocks.len() > 1 {
        let mut next = Vec::with_capacity((blocks.len() + 1) / 2);
        for pair in blocks.chunks(2) {
            if let [left, right] = pair {
                let mut hasher = Sha3_256::new();
                hasher.update(left);
                hasher.update(right);
                next.push(hasher.finalize().into());
            } else {
                next.push(pair[0]);
            }
        }
        blocks = next;
    }
    blocks[0]
}
