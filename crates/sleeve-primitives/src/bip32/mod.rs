//! BIP32 hierarchical deterministic derivation on secp256k1.
//!
//! Implements master-node generation from a seed, hardened and
//! non-hardened child key derivation with the BIP32 retry rule, and
//! canonical derivation-path encoding (`m/44'/0'/0'/0/7`).

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::ScalarPrimitive;
use k256::{Scalar, Secp256k1};
use zeroize::Zeroize;

use crate::hash::sha512_hmac;
use crate::PrimitivesError;

/// Flag bit marking a hardened path segment.
pub const HARDENED: u32 = 0x8000_0000;

/// HMAC key for master-node generation, fixed by BIP32.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Retry budget for the BIP32 invalid-child rule. A single retry fires
/// with probability below 2^-127, so exhausting this bound is
/// cryptographically unreachable.
const MAX_CKD_RETRIES: u32 = 8;

/// An extended private key: a secp256k1 scalar and its chain code.
///
/// The key is guaranteed nonzero and below the curve order. Both halves
/// are zeroised when the node is dropped.
pub struct HdNode {
    key: [u8; 32],
    code: [u8; 32],
}

impl HdNode {
    /// The 32-byte private key scalar.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code.
    pub fn code(&self) -> &[u8; 32] {
        &self.code
    }

    /// Compressed SEC1 serialization of the corresponding public key.
    fn public_bytes(&self) -> [u8; 33] {
        let signing_key = SigningKey::from_bytes(&self.key.into())
            .expect("node key is validated at construction");
        let point = signing_key.verifying_key().to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }
}

impl Drop for HdNode {
    fn drop(&mut self) {
        self.key.zeroize();
        self.code.zeroize();
    }
}

/// Generate the master node from a seed.
///
/// Computes HMAC-SHA512 with key `"Bitcoin seed"` over the seed and splits
/// the result into key and chain code.
///
/// # Arguments
/// * `seed` - Seed bytes, typically the 64-byte BIP39 seed.
///
/// # Returns
/// The master `HdNode`, or `InvalidMasterKey` if the left half is zero or
/// not below the curve order.
pub fn master_from_seed(seed: &[u8]) -> Result<HdNode, PrimitivesError> {
    let i = sha512_hmac(MASTER_HMAC_KEY, seed);
    let (il, ir) = i.split_at(32);

    if parse_scalar(il).is_none() || il.iter().all(|&b| b == 0) {
        return Err(PrimitivesError::InvalidMasterKey);
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(il);
    let mut code = [0u8; 32];
    code.copy_from_slice(ir);
    Ok(HdNode { key, code })
}

/// Derive a child node from a parent.
///
/// Indices at or above [`HARDENED`] use the parent private key in the HMAC
/// input (`0x00 || key || ser32(i)`); lower indices use the compressed
/// parent public key. A degenerate result (left half at or above the curve
/// order, or a zero child key) retries with the next index per BIP32.
///
/// # Arguments
/// * `parent` - The parent node.
/// * `index` - Child index; the high bit selects hardened derivation.
///
/// # Returns
/// The child `HdNode`. `DerivationFailure` surfaces only if every retry
/// candidate is degenerate, which is cryptographically negligible.
pub fn ckd(parent: &HdNode, index: u32) -> Result<HdNode, PrimitivesError> {
    let mut i = index;
    for _ in 0..MAX_CKD_RETRIES {
        let mut data = Vec::with_capacity(37);
        if i >= HARDENED {
            data.push(0x00);
            data.extend_from_slice(&parent.key);
        } else {
            data.extend_from_slice(&parent.public_bytes());
        }
        data.extend_from_slice(&i.to_be_bytes());

        let out = sha512_hmac(&parent.code, &data);
        let (il, ir) = out.split_at(32);
        if let Some(key) = child_key(il, &parent.key) {
            let mut code = [0u8; 32];
            code.copy_from_slice(ir);
            return Ok(HdNode { key, code });
        }
        i = i
            .checked_add(1)
            .ok_or(PrimitivesError::DerivationFailure)?;
    }
    Err(PrimitivesError::DerivationFailure)
}

/// Derive the node at `path`, walking segment by segment from the master.
///
/// # Arguments
/// * `seed` - Seed bytes for the master node.
/// * `path` - Segments to walk, in order.
///
/// # Returns
/// The node at the end of the path.
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<HdNode, PrimitivesError> {
    let mut node = master_from_seed(seed)?;
    for &segment in path.segments() {
        node = ckd(&node, segment)?;
    }
    Ok(node)
}

/// Compute `(I_L + parent) mod n`, rejecting degenerate candidates.
///
/// Returns `None` when `I_L` is not below the curve order or the sum is
/// zero, triggering the caller's retry.
fn child_key(il: &[u8], parent_key: &[u8; 32]) -> Option<[u8; 32]> {
    let il_scalar = parse_scalar(il)?;
    let parent_scalar =
        parse_scalar(parent_key).expect("node key is validated at construction");
    let sum = il_scalar + parent_scalar;

    let primitive: ScalarPrimitive<Secp256k1> = sum.into();
    let bytes = primitive.to_bytes();
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Some(out)
}

/// Parse 32 big-endian bytes as a canonical scalar; `None` if out of range.
fn parse_scalar(bytes: &[u8]) -> Option<Scalar> {
    use k256::elliptic_curve::PrimeField;
    let arr: [u8; 32] = bytes.try_into().ok()?;
    Option::from(Scalar::from_repr(arr.into()))
}

/// An ordered sequence of 32-bit derivation segments.
///
/// The canonical string form uses a leading `m`, `/` separators, and a
/// trailing apostrophe on hardened segments. Printing and re-parsing a
/// path reproduces it exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// Build a path from raw segments (hardened bit included).
    pub fn new(segments: Vec<u32>) -> Self {
        DerivationPath(segments)
    }

    /// The raw segments, hardened bit included.
    pub fn segments(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for &segment in &self.0 {
            if segment >= HARDENED {
                write!(f, "/{}'", segment - HARDENED)?;
            } else {
                write!(f, "/{}", segment)?;
            }
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        if parts.next() != Some("m") {
            return Err(PrimitivesError::InvalidPath(
                "path must start with \"m\"".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for part in parts {
            let (digits, hardened) = match part.strip_suffix('\'') {
                Some(d) => (d, true),
                None => (part, false),
            };
            let value: u32 = digits.parse().map_err(|_| {
                PrimitivesError::InvalidPath(format!("invalid segment {:?}", part))
            })?;
            if value >= HARDENED {
                return Err(PrimitivesError::InvalidPath(format!(
                    "segment {} out of range",
                    value
                )));
            }
            segments.push(if hardened { value | HARDENED } else { value });
        }
        Ok(DerivationPath(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP32 test vector 1: seed 000102030405060708090a0b0c0d0e0f.
    const VECTOR_1_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn test_master_from_seed_vector_1() {
        let seed = hex::decode(VECTOR_1_SEED).unwrap();
        let node = master_from_seed(&seed).unwrap();
        assert_eq!(
            hex::encode(node.key()),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            hex::encode(node.code()),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
    }

    #[test]
    fn test_hardened_child_vector_1() {
        let seed = hex::decode(VECTOR_1_SEED).unwrap();
        let master = master_from_seed(&seed).unwrap();
        let child = ckd(&master, HARDENED).unwrap(); // m/0'
        assert_eq!(
            hex::encode(child.key()),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
    }

    #[test]
    fn test_normal_child_vector_1() {
        let seed = hex::decode(VECTOR_1_SEED).unwrap();
        let master = master_from_seed(&seed).unwrap();
        let child = ckd(&master, HARDENED).unwrap(); // m/0'
        let grandchild = ckd(&child, 1).unwrap(); // m/0'/1
        assert_eq!(
            hex::encode(grandchild.key()),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
    }

    #[test]
    fn test_derive_walks_path() {
        let seed = hex::decode(VECTOR_1_SEED).unwrap();
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        let node = derive(&seed, &path).unwrap();
        assert_eq!(
            hex::encode(node.key()),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
    }

    #[test]
    fn test_path_display() {
        let path = DerivationPath::new(vec![
            44 | HARDENED,
            1955 | HARDENED,
            HARDENED,
            HARDENED,
            HARDENED,
        ]);
        assert_eq!(path.to_string(), "m/44'/1955'/0'/0'/0'");

        let mixed = DerivationPath::new(vec![44 | HARDENED, 60 | HARDENED, HARDENED, 0, 12345]);
        assert_eq!(mixed.to_string(), "m/44'/60'/0'/0/12345");
    }

    #[test]
    fn test_path_parse_round_trip() {
        for s in ["m", "m/0", "m/0'", "m/44'/1955'/7'/0'/0'", "m/44'/60'/0'/0/2147483647"] {
            let path: DerivationPath = s.parse().unwrap();
            assert_eq!(path.to_string(), s);
        }
    }

    #[test]
    fn test_path_parse_errors() {
        assert!("44'/0'".parse::<DerivationPath>().is_err());
        assert!("m/abc".parse::<DerivationPath>().is_err());
        assert!("m/2147483648".parse::<DerivationPath>().is_err());
        assert!("m/-1".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn test_master_rejects_nothing_normal() {
        // Any realistic seed yields a valid master.
        let node = master_from_seed(&[0u8; 64]).unwrap();
        assert_ne!(node.key(), &[0u8; 32]);
    }
}
