//! SHA-512 backend capability.
//!
//! Every implementation exposes the same four-operation contract:
//! initialize, absorb full blocks, absorb the final partial block together
//! with the total length, then read digest slices. Callers written against
//! [`Sha512Backend`] can switch implementation without changes.
//!
//! The implementation used by [`DefaultBackend`] is chosen at build time:
//! - by default, the portable engine ([`Sha512State`])
//! - with the `sha2-backend` feature, [`Sha2Backend`], which delegates to
//!   the RustCrypto `sha2` crate

use super::state::digest_range;
use super::{BLOCK_SIZE, HASH_SIZE, Sha512Error};

#[cfg(any(doc, not(feature = "sha2-backend")))]
use super::Sha512State;

/// Incremental SHA-512 contract.
///
/// Data is fed in as a sequence of full blocks terminated by exactly one
/// partial block (possibly empty). After [`finalize`](Self::finalize) only
/// digest reads are valid.
pub trait Sha512Backend: Sized {
    /// Creates a fresh state.
    fn init() -> Self;

    /// Number of bytes absorbed through full blocks so far.
    fn absorbed(&self) -> u64;

    /// Absorbs one full block.
    ///
    /// # Errors
    /// - `AlreadyFinalized` if the state was finalized
    /// - `LengthOverflow` if the absorbed length no longer fits in 64 bits
    fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) -> Result<(), Sha512Error>;

    /// Pads and absorbs the final partial block.
    ///
    /// `tail` holds the `total_size % 128` trailing bytes of the stream not
    /// yet absorbed. It may be empty, but the call is still required to
    /// terminate the stream.
    ///
    /// # Errors
    /// - `AlreadyFinalized` if the state was finalized
    /// - `TailLengthMismatch` if `tail.len() != total_size % 128`
    /// - `TotalSizeMismatch` if `total_size` disagrees with the absorbed
    ///   blocks
    fn finalize(&mut self, tail: &[u8], total_size: u64) -> Result<(), Sha512Error>;

    /// Copies digest bytes `offset..offset + out.len()` into `out`.
    ///
    /// # Errors
    /// - `NotFinalized` if the state was not finalized
    /// - `OutOfRange` if the range exceeds the 64-byte digest
    fn read_digest(&self, offset: u32, out: &mut [u8]) -> Result<(), Sha512Error>;

    /// Returns digest bytes `offset..offset + len`.
    fn get_digest_slice(&self, offset: u32, len: u32) -> Result<Vec<u8>, Sha512Error> {
        let range = digest_range(offset, len)?;

        let mut out = vec![0u8; range.len()];
        self.read_digest(offset, &mut out)?;

        Ok(out)
    }

    /// Returns the full 64-byte digest.
    fn digest(&self) -> Result<[u8; HASH_SIZE], Sha512Error> {
        let mut out = [0u8; HASH_SIZE];
        self.read_digest(0, &mut out)?;

        Ok(out)
    }

    /// Absorbs a run of full blocks.
    ///
    /// # Errors
    /// - `InvalidBlockLength` if `data` is not a whole number of blocks;
    ///   nothing is absorbed in that case
    fn update_blocks(&mut self, data: &[u8]) -> Result<(), Sha512Error> {
        let (blocks, rest) = data.as_chunks::<BLOCK_SIZE>();

        if !rest.is_empty() {
            return Err(Sha512Error::InvalidBlockLength(data.len()));
        }

        for block in blocks {
            self.compress_block(block)?;
        }

        Ok(())
    }

    /// Finalizes using the internally tracked length.
    fn finish(&mut self, tail: &[u8]) -> Result<(), Sha512Error> {
        let total_size = self
            .absorbed()
            .checked_add(tail.len() as u64)
            .ok_or(Sha512Error::LengthOverflow)?;

        self.finalize(tail, total_size)
    }
}

/// Backend selected at build time.
#[cfg(not(feature = "sha2-backend"))]
pub type DefaultBackend = Sha512State;

/// Backend selected at build time.
#[cfg(feature = "sha2-backend")]
pub type DefaultBackend = Sha2Backend;

#[cfg(feature = "sha2-backend")]
pub use delegated::Sha2Backend;

#[cfg(feature = "sha2-backend")]
mod delegated {
    use sha2::Digest;

    use crate::hash::sha512::state::Progress;
    use crate::hash::sha512::{BLOCK_SIZE, HASH_SIZE, Sha512Backend, Sha512Error};

    /// SHA-512 backend delegating to the RustCrypto `sha2` crate.
    ///
    /// Applies the same lifecycle and length checks as the portable engine,
    /// so both backends accept and reject exactly the same call sequences.
    #[derive(Clone)]
    pub struct Sha2Backend {
        hasher: sha2::Sha512,
        digest: [u8; HASH_SIZE],
        progress: Progress,
    }

    impl Sha512Backend for Sha2Backend {
        fn init() -> Self {
            Self {
                hasher: sha2::Sha512::new(),
                digest: [0u8; HASH_SIZE],
                progress: Progress::new(),
            }
        }

        fn absorbed(&self) -> u64 {
            self.progress.absorbed()
        }

        fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) -> Result<(), Sha512Error> {
            self.progress.absorb(BLOCK_SIZE as u64)?;
            self.hasher.update(block);

            Ok(())
        }

        fn finalize(&mut self, tail: &[u8], total_size: u64) -> Result<(), Sha512Error> {
            self.progress.finish(tail, total_size)?;

            self.hasher.update(tail);
            let hasher = core::mem::take(&mut self.hasher);
            self.digest.copy_from_slice(&hasher.finalize());

            Ok(())
        }

        fn read_digest(&self, offset: u32, out: &mut [u8]) -> Result<(), Sha512Error> {
            let len = u32::try_from(out.len()).unwrap_or(u32::MAX);
            let range = self.progress.digest_range(offset, len)?;

            out.copy_from_slice(&self.digest[range]);

            Ok(())
        }
    }
}
