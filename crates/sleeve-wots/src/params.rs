//! WOTS+ parameter families.
//!
//! Four fixed security levels trade chain count against chain length.
//! The digest width `n` is 32 bytes throughout.

use crate::WotsError;

/// Digest width in bytes for every parameter set.
pub const N: usize = 32;

/// Identifies one of the fixed WOTS+ parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamsEncoding {
    /// w = 256: 34 chains of 255 steps.
    Level0,
    /// w = 16: 67 chains of 15 steps.
    Level1,
    /// w = 4: 132 chains of 3 steps.
    Level2,
    /// w = 2: 264 chains of 1 step.
    Level3,
}

/// The parameter set used when callers do not pick one explicitly.
pub const DEFAULT_PARAMS: ParamsEncoding = ParamsEncoding::Level0;

impl ParamsEncoding {
    /// Resolve the encoding to its concrete parameter set.
    pub fn params(self) -> Params {
        match self {
            ParamsEncoding::Level0 => Params { w: 256, len_1: 32, len_2: 2, len: 34 },
            ParamsEncoding::Level1 => Params { w: 16, len_1: 64, len_2: 3, len: 67 },
            ParamsEncoding::Level2 => Params { w: 4, len_1: 128, len_2: 4, len: 132 },
            ParamsEncoding::Level3 => Params { w: 2, len_1: 256, len_2: 8, len: 264 },
        }
    }

    /// The numeric wire encoding of this parameter set.
    pub fn encode(self) -> u8 {
        match self {
            ParamsEncoding::Level0 => 0,
            ParamsEncoding::Level1 => 1,
            ParamsEncoding::Level2 => 2,
            ParamsEncoding::Level3 => 3,
        }
    }
}

impl TryFrom<u8> for ParamsEncoding {
    type Error = WotsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ParamsEncoding::Level0),
            1 => Ok(ParamsEncoding::Level1),
            2 => Ok(ParamsEncoding::Level2),
            3 => Ok(ParamsEncoding::Level3),
            other => Err(WotsError::InvalidParamsEncoding(other)),
        }
    }
}

/// A concrete WOTS+ parameter set.
///
/// `len_1` chains carry the message digits, `len_2` the Winternitz
/// checksum digits; `len = len_1 + len_2` chains of `w - 1` hash steps
/// each make up a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Winternitz parameter: the radix of the digit decomposition.
    pub w: u32,
    /// Number of message chains.
    pub len_1: usize,
    /// Number of checksum chains.
    pub len_2: usize,
    /// Total number of chains.
    pub len: usize,
}
