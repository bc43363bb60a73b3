//! Errors reported by the incremental SHA-512 API.
//!
//! Every variant is a caller contract violation. None of them can be
//! caused by the message contents.

use core::fmt;

/// Misuse of the incremental SHA-512 interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha512Error {
    /// A block or finalization was fed into an already finalized state.
    AlreadyFinalized,

    /// The digest was read before the state was finalized.
    NotFinalized,

    /// Data passed as full blocks is not a multiple of 128 bytes.
    InvalidBlockLength(usize),

    /// The final partial block does not hold `total_size % 128` bytes.
    TailLengthMismatch {
        /// Length of the supplied tail.
        tail: usize,
        /// Total stream length claimed by the caller.
        total_size: u64,
    },

    /// The claimed total length disagrees with what was actually absorbed.
    TotalSizeMismatch {
        /// Bytes absorbed through full blocks.
        absorbed: u64,
        /// Total stream length claimed by the caller.
        total_size: u64,
        /// Length of the supplied tail.
        tail: usize,
    },

    /// The requested digest range does not fit inside the 64-byte digest.
    OutOfRange {
        /// Requested start offset.
        offset: u32,
        /// Requested length.
        len: u32,
    },

    /// The absorbed length no longer fits in 64 bits.
    LengthOverflow,
}

impl fmt::Display for Sha512Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "sha512 state is already finalized"),
            Self::NotFinalized => write!(f, "sha512 state is not finalized"),
            Self::InvalidBlockLength(len) => {
                write!(f, "{len} bytes is not a whole number of 128-byte blocks")
            }
            Self::TailLengthMismatch { tail, total_size } => write!(
                f,
                "tail of {tail} bytes does not match total size {total_size} (expected {})",
                total_size % 128
            ),
            Self::TotalSizeMismatch {
                absorbed,
                total_size,
                tail,
            } => write!(
                f,
                "total size {total_size} does not match {absorbed} absorbed bytes plus a {tail}-byte tail"
            ),
            Self::OutOfRange { offset, len } => write!(
                f,
                "digest range {offset}+{len} exceeds {} bytes",
                super::HASH_SIZE
            ),
            Self::LengthOverflow => write!(f, "message length overflows 64 bits"),
        }
    }
}

impl std::error::Error for Sha512Error {}
