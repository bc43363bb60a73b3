//! SHA-512 hashing core for Nebula
//!
//! This crate provides the incremental SHA-512 engine used by the
//! higher-level Nebula primitives (key derivation, Ed25519 signatures).
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! engine is a small, explicit state machine:
//!
//! 1. [`Sha512State::init`] creates a fresh state from the standard IV.
//! 2. [`Sha512State::compress_block`] absorbs one full 128-byte block.
//! 3. [`Sha512State::finalize`] pads and absorbs the trailing partial
//!    block (0 to 127 bytes) together with the total stream length.
//! 4. [`Sha512State::get_digest_slice`] reads any contiguous range of the
//!    64-byte digest.
//!
//! Buffering of partial blocks across calls is the caller's job. The
//! engine only ever sees full blocks and a single final tail.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-512 engine: constants, compression function, incremental
//!   state, error type and the backend capability trait.
//!
//! # Cargo features
//!
//! - `speed`: fully unrolls the 80-round loop.
//! - `sha2-backend`: makes [`DefaultBackend`] delegate to the RustCrypto
//!   `sha2` crate behind the same contract.
//!
//! # Design goals
//!
//! - No heap allocations on the block and finalization paths
//! - Constant-time processing of message bytes
//! - Misuse reported as explicit errors, never as silent truncation

pub mod hash;

pub use hash::sha512::{
    BLOCK_SIZE, DefaultBackend, HASH_SIZE, Sha512Backend, Sha512Error, Sha512State, sha512,
};

#[cfg(feature = "sha2-backend")]
pub use hash::sha512::Sha2Backend;
