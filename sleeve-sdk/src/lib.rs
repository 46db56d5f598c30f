#![deny(missing_docs)]

//! Sleeve SDK - Complete SDK.
//!
//! Re-exports all Sleeve SDK components for convenient single-crate usage.

pub use sleeve_primitives as primitives;
pub use sleeve_wots as wots;
pub use sleeve_wallet as wallet;
