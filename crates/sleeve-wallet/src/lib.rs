/// Sleeve SDK - Quantum-secure deterministic wallet generation.
///
/// A Sleeve wallet binds a WOTS+ (post-quantum, one-time) public key into
/// the generation of ordinary elliptic-curve wallet keys, so one 24-word
/// recovery phrase backs both a quantum-secure identity and any number of
/// conventional BIP44 chain wallets. Two constructions are provided:
///
/// - [`Sleeve`]: the dual-mnemonic construction. The classical wallet is a
///   second phrase encoding `SHA3-256(sk || WOTS_PK)`, importable into any
///   BIP39 wallet.
/// - [`SingleSeedSleeve`]: the single-seed construction. One phrase; the
///   classical keys live on a non-hardened BIP44 index derived from
///   `SHA3-256(WOTS_PK)`.

mod error;
mod pipeline;
pub use error::WalletError;

pub mod network;
pub mod single_seed;
pub mod sleeve;
pub mod spec;

pub use network::NetworkKey;
pub use single_seed::SingleSeedSleeve;
pub use sleeve::Sleeve;
pub use spec::{GenSpec, ENTROPY_SIZE, QUANTUM_COIN_TYPE};
