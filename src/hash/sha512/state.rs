//! Incremental SHA-512 state.
//!
//! A state moves through three phases:
//!
//! - `Fresh`: just initialized, nothing absorbed
//! - `Accumulating`: one or more full blocks absorbed
//! - `Finalized`: the tail was padded and absorbed, only digest reads remain
//!
//! Besides the chaining value the state counts the bytes absorbed through
//! full blocks. Finalization checks the caller's total length against that
//! count, so a length tracked wrongly by the caller is reported instead of
//! silently producing a wrong digest.

use core::fmt;
use core::ops::Range;

use super::core::{compress, pad_and_compress, serialize};
use super::{BLOCK_SIZE, H512_INIT, HASH_SIZE, Sha512Backend, Sha512Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Fresh,
    Accumulating,
    Finalized,
}

/// Lifecycle and length bookkeeping shared by every backend.
///
/// Each method validates first and records afterwards, so a rejected call
/// leaves the bookkeeping untouched.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Progress {
    absorbed: u64,
    phase: Phase,
}

impl Progress {
    pub(crate) const fn new() -> Self {
        Self {
            absorbed: 0,
            phase: Phase::Fresh,
        }
    }

    pub(crate) fn absorbed(&self) -> u64 {
        self.absorbed
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// Records `len` bytes of full blocks about to be compressed.
    pub(crate) fn absorb(&mut self, len: u64) -> Result<(), Sha512Error> {
        if self.phase == Phase::Finalized {
            return Err(Sha512Error::AlreadyFinalized);
        }

        self.absorbed = self
            .absorbed
            .checked_add(len)
            .ok_or(Sha512Error::LengthOverflow)?;
        self.phase = Phase::Accumulating;

        Ok(())
    }

    /// Validates the final tail against the absorbed length and marks the
    /// state finalized.
    pub(crate) fn finish(&mut self, tail: &[u8], total_size: u64) -> Result<(), Sha512Error> {
        if self.phase == Phase::Finalized {
            return Err(Sha512Error::AlreadyFinalized);
        }

        let tail_len = tail.len() as u64;

        if tail.len() >= BLOCK_SIZE || tail_len != total_size % BLOCK_SIZE as u64 {
            return Err(Sha512Error::TailLengthMismatch {
                tail: tail.len(),
                total_size,
            });
        }

        if total_size - tail_len != self.absorbed {
            return Err(Sha512Error::TotalSizeMismatch {
                absorbed: self.absorbed,
                total_size,
                tail: tail.len(),
            });
        }

        self.phase = Phase::Finalized;

        Ok(())
    }

    /// Returns the byte range of the digest covered by `offset..offset + len`.
    pub(crate) fn digest_range(&self, offset: u32, len: u32) -> Result<Range<usize>, Sha512Error> {
        if self.phase != Phase::Finalized {
            return Err(Sha512Error::NotFinalized);
        }

        digest_range(offset, len)
    }
}

/// Bounds check for a digest slice, computed without overflow.
pub(crate) fn digest_range(offset: u32, len: u32) -> Result<Range<usize>, Sha512Error> {
    let end = u64::from(offset) + u64::from(len);

    if end > HASH_SIZE as u64 {
        return Err(Sha512Error::OutOfRange { offset, len });
    }

    Ok(offset as usize..end as usize)
}

/// Portable SHA-512 state.
///
/// Holds the 8-word chaining value together with the lifecycle bookkeeping.
/// The state is a plain value: clone it to fork a computation, move it to
/// another thread to continue there.
///
/// ```
/// use cryptal_sha512::{Sha512Backend, Sha512State};
///
/// let mut state = Sha512State::init();
/// state.finalize(b"abc", 3).unwrap();
///
/// let prefix = state.get_digest_slice(0, 4).unwrap();
/// assert_eq!(prefix, [0xdd, 0xaf, 0x35, 0xa1]);
/// ```
#[derive(Clone)]
pub struct Sha512State {
    h: [u64; 8],
    progress: Progress,
}

impl Sha512State {
    /// Creates a state holding the standard SHA-512 initial hash value.
    pub const fn new() -> Self {
        Self {
            h: H512_INIT,
            progress: Progress::new(),
        }
    }

    /// Current chaining value.
    ///
    /// Once finalized, these are the digest words.
    pub fn words(&self) -> &[u64; 8] {
        &self.h
    }

    pub fn is_finalized(&self) -> bool {
        self.progress.phase() == Phase::Finalized
    }
}

impl Default for Sha512State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha512State {
    // The chaining value is derived from possibly secret input
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha512State")
            .field("absorbed", &self.progress.absorbed())
            .field("phase", &self.progress.phase())
            .finish_non_exhaustive()
    }
}

impl Sha512Backend for Sha512State {
    fn init() -> Self {
        Self::new()
    }

    fn absorbed(&self) -> u64 {
        self.progress.absorbed()
    }

    fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) -> Result<(), Sha512Error> {
        self.progress.absorb(BLOCK_SIZE as u64)?;
        compress(block, &mut self.h);

        Ok(())
    }

    fn finalize(&mut self, tail: &[u8], total_size: u64) -> Result<(), Sha512Error> {
        self.progress.finish(tail, total_size)?;
        pad_and_compress(&mut self.h, tail, total_size);

        Ok(())
    }

    fn read_digest(&self, offset: u32, out: &mut [u8]) -> Result<(), Sha512Error> {
        let len = u32::try_from(out.len()).unwrap_or(u32::MAX);
        let range = self.progress.digest_range(offset, len)?;

        out.copy_from_slice(&serialize(&self.h)[range]);

        Ok(())
    }
}
