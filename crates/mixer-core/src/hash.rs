//! Deterministic 32-bit hashing primitives and seed-derivation helpers.
//!
//! Every function here is pure and uses wrapping unsigned 32-bit arithmetic
//! so identical inputs rank identically on every platform. The constants are
//! pinned: changing any of them changes every ranking ever produced.

use rand::RngCore;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Odd 32-bit constant mixed into the seed between attempts.
const RESEED_SALT: u32 = 0x9e37_79b9;

/// FNV-1a over the little-endian 4-byte serialization of `value`.
///
/// The explicit byte serialization keeps the digest identical across
/// endiannesses; the wrapping multiply keeps it identical across overflow
/// semantics.
pub fn mix32(value: u32) -> u32 {
    let mut digest = FNV_OFFSET_BASIS;
    for byte in value.to_le_bytes() {
        digest ^= u32::from(byte);
        digest = digest.wrapping_mul(FNV_PRIME);
    }
    digest
}

/// Reduces a textual badge to a 32-bit code via a rolling hash over its
/// UTF-16 code units (`h = unit + h*31`, wrapping).
///
/// UTF-16 units are mandatory rather than chars or bytes: badges containing
/// characters outside the basic multilingual plane hash as their surrogate
/// pairs. The reduction is deliberately not collision-free; rank ties are
/// resolved downstream by participant id.
pub fn badge_code(badge: &str) -> u32 {
    let mut hash: u32 = 0;
    for unit in badge.encode_utf16() {
        hash = u32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

/// Computes the rank key for one participant code under the given seed.
pub fn rank_key(code: u32, seed: u32) -> u32 {
    mix32(code ^ seed)
}

/// Derives the next attempt seed from the current one.
pub fn reseed(seed: u32) -> u32 {
    mix32(seed ^ RESEED_SALT)
}

/// Masks an arbitrary caller-supplied seed down to the 32-bit range.
pub fn mask_seed(raw: u64) -> u32 {
    (raw & 0xffff_ffff) as u32
}

/// Derives an initial round seed from a millisecond wall-clock reading.
///
/// The engine never reads a clock itself; callers that want a time-derived
/// seed pass the reading in.
pub fn seed_from_clock_ms(ms: u64) -> u32 {
    mix32(mask_seed(ms))
}

/// Draws a fresh uniformly distributed round seed from the provided RNG.
pub fn fresh_seed(rng: &mut impl RngCore) -> u32 {
    rng.next_u32()
}
