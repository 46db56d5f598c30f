//! BIP39 mnemonic codec.
//!
//! Converts entropy to and from mnemonic phrases over the 2048-word
//! English list, and derives the 64-byte wallet seed with
//! PBKDF2-HMAC-SHA512 (2048 iterations, salt `"mnemonic" || passphrase`).

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::hash::{pbkdf2_hmac_sha512, sha256};
use crate::PrimitivesError;

/// Size of a derived wallet seed in bytes.
pub const SEED_SIZE: usize = 64;

/// PBKDF2 iteration count fixed by BIP39.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Number of words in the English list.
const WORDLIST_LEN: usize = 2048;

static WORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let words: Vec<&'static str> = include_str!("english.txt").split_whitespace().collect();
    debug_assert_eq!(words.len(), WORDLIST_LEN);
    words
});

static WORD_INDEX: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    WORDS
        .iter()
        .enumerate()
        .map(|(i, &w)| (w, i as u16))
        .collect()
});

/// Convert entropy bytes to a mnemonic phrase.
///
/// Accepts 16, 20, 24, 28, or 32 bytes of entropy. The phrase carries the
/// entropy followed by `len/4` checksum bits taken from SHA-256 of the
/// entropy, packed into 11-bit word indices.
///
/// # Arguments
/// * `entropy` - The entropy bytes to encode.
///
/// # Returns
/// The space-separated mnemonic phrase, or `BadEntropySize` for any other
/// input length.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<String, PrimitivesError> {
    if !matches!(entropy.len(), 16 | 20 | 24 | 28 | 32) {
        return Err(PrimitivesError::BadEntropySize { got: entropy.len() });
    }

    let checksum = sha256(entropy);
    let cs_bits = entropy.len() / 4;
    let word_count = (entropy.len() * 8 + cs_bits) / 11;

    let mut words = Vec::with_capacity(word_count);
    for w in 0..word_count {
        let mut index = 0usize;
        for b in 0..11 {
            let pos = w * 11 + b;
            let byte = if pos / 8 < entropy.len() {
                entropy[pos / 8]
            } else {
                checksum[pos / 8 - entropy.len()]
            };
            index = (index << 1) | ((byte >> (7 - pos % 8)) & 1) as usize;
        }
        words.push(WORDS[index]);
    }
    Ok(words.join(" "))
}

/// Recover the entropy bytes from a mnemonic phrase.
///
/// Validates the word count, every word against the English list, and the
/// checksum bits carried in the final word.
///
/// # Arguments
/// * `mnemonic` - A space-separated phrase of 12, 15, 18, 21, or 24 words.
///
/// # Returns
/// The original entropy, or `BadWordCount`, `UnknownWord`, or
/// `ChecksumMismatch` on validation failure.
pub fn mnemonic_to_entropy(mnemonic: &str) -> Result<Vec<u8>, PrimitivesError> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if !matches!(words.len(), 12 | 15 | 18 | 21 | 24) {
        return Err(PrimitivesError::BadWordCount { got: words.len() });
    }

    // Pack the 11-bit word indices into a contiguous bit buffer.
    let total_bits = words.len() * 11;
    let mut buf = vec![0u8; (total_bits + 7) / 8];
    for (w, word) in words.iter().enumerate() {
        let index = *WORD_INDEX
            .get(word)
            .ok_or_else(|| PrimitivesError::UnknownWord((*word).to_string()))?;
        for b in 0..11 {
            if (index >> (10 - b)) & 1 == 1 {
                let pos = w * 11 + b;
                buf[pos / 8] |= 1 << (7 - pos % 8);
            }
        }
    }

    let cs_bits = words.len() / 3;
    let entropy_len = (total_bits - cs_bits) / 8;
    let entropy = buf[..entropy_len].to_vec();

    let checksum = sha256(&entropy);
    for b in 0..cs_bits {
        let pos = entropy_len * 8 + b;
        let got = (buf[pos / 8] >> (7 - pos % 8)) & 1;
        let want = (checksum[b / 8] >> (7 - b % 8)) & 1;
        if got != want {
            return Err(PrimitivesError::ChecksumMismatch);
        }
    }
    Ok(entropy)
}

/// Check whether a phrase is a valid BIP39 mnemonic.
pub fn validate(mnemonic: &str) -> bool {
    mnemonic_to_entropy(mnemonic).is_ok()
}

/// Derive the 64-byte wallet seed from a mnemonic and passphrase.
///
/// Both inputs are NFKD-normalised; the password is the mnemonic and the
/// salt is `"mnemonic"` followed by the passphrase, per BIP39.
///
/// # Arguments
/// * `mnemonic` - The mnemonic phrase (not validated here).
/// * `passphrase` - Optional passphrase; pass `""` for none.
///
/// # Returns
/// The 64-byte seed.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> [u8; SEED_SIZE] {
    let password: String = mnemonic.nfkd().collect();
    let mut salt = String::with_capacity(8 + passphrase.len());
    salt.push_str("mnemonic");
    salt.extend(passphrase.nfkd());

    let mut seed = [0u8; SEED_SIZE];
    pbkdf2_hmac_sha512(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
    seed
}
