//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - the final-block padding shared by every incremental state
//! - a complete SHA-512 hashing function for arbitrary-length input

use super::computations::all_rounds;
use super::{BLOCK_SIZE, H512_INIT, HASH_SIZE};
#[cfg(doc)]
use super::Sha512State;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the hash state in place.
///
/// This is a low-level API: it does not track lifecycle or length. Use
/// [`Sha512State`] unless the raw chaining value is needed.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
/// - The remaining 64 schedule words are expanded by `all_rounds`.
pub fn compress(block: &[u8; BLOCK_SIZE], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.as_chunks::<8>().0) {
        *slot = u64::from_be_bytes(*chunk);
    }

    all_rounds(state, w);
}

/// Pads `tail` and compresses the final one or two blocks.
///
/// `tail` must be shorter than a block and `total_size` is the full stream
/// length in bytes. The length field is the 128-bit big-endian bit count.
pub(crate) fn pad_and_compress(state: &mut [u64; 8], tail: &[u8], total_size: u64) {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut block = [0u8; BLOCK_SIZE];
    let rem = tail.len();

    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    // No room left for the 16-byte length field
    if rem > BLOCK_SIZE - 17 {
        compress(&block, state);
        block = [0; BLOCK_SIZE];
    }

    let bit_len = u128::from(total_size) << 3;
    block[BLOCK_SIZE - 16..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, state);
}

/// Serializes the chaining value as the 64-byte big-endian digest.
pub(crate) fn serialize(state: &[u64; 8]) -> [u8; HASH_SIZE] {
    let mut out = [0u8; HASH_SIZE];

    for (chunk, word) in out.chunks_exact_mut(8).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Computes the SHA-512 hash of the given input.
///
/// The input is split into full blocks and a trailing partial block, fed
/// through the same compression and padding steps as [`Sha512State`].
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
///
/// # Notes
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; HASH_SIZE] {
    let mut state = H512_INIT;

    let (blocks, tail) = input.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
        compress(block, &mut state);
    }

    pad_and_compress(&mut state, tail, input.len() as u64);

    serialize(&state)
}
