/// Sleeve SDK - Cryptographic primitives for deterministic wallet generation.
///
/// This crate provides the foundational building blocks for the Sleeve SDK:
/// - Hash functions (SHA-256, SHA3-256, HMAC-SHA512, PBKDF2-HMAC-SHA512)
/// - BIP39 mnemonic codec over the 2048-word English list
/// - BIP32 hierarchical deterministic derivation on secp256k1

pub mod hash;
pub mod bip39;
pub mod bip32;

mod error;
pub use error::PrimitivesError;
