//! Hash function primitives for the Sleeve SDK.
//!
//! Provides SHA-256, SHA3-256, HMAC-SHA512, and PBKDF2-HMAC-SHA512.
//! SHA3-256 is the commitment function used throughout the WOTS+ engine
//! and the Sleeve constructions; SHA-256 serves the BIP39 checksum and
//! the HMAC/PBKDF2 variants serve BIP32 and BIP39 seed derivation.

use sha2::{Sha256, Sha512, Digest};
use sha3::Sha3_256;
use hmac::{Hmac, Mac};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA3-256 hash of the input data.
///
/// This is the commitment function for the WOTS+ chain, the Sleeve
/// binding hash, and derivation-index extraction. Callers achieve
/// domain separation by prefixing their own context bytes.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA3-256 digest.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute HMAC-SHA512 of the input data with the given key.
///
/// # Arguments
/// * `key` - The HMAC key bytes.
/// * `data` - The message bytes to authenticate.
///
/// # Returns
/// A 64-byte HMAC-SHA512 tag.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> [u8; 64] {
    type HmacSha512 = Hmac<Sha512>;
    let mut mac = HmacSha512::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    let result = mac.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result.into_bytes());
    output
}

/// Derive key material with PBKDF2-HMAC-SHA512.
///
/// # Arguments
/// * `password` - The password bytes.
/// * `salt` - The salt bytes.
/// * `rounds` - Iteration count.
/// * `output` - Buffer filled with the derived key material.
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], rounds: u32, output: &mut [u8]) {
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, output);
}
