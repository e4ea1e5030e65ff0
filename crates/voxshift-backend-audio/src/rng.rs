//! Seedable RNG for impulse response generation.
//!
//! Reverb impulse responses are noise, so every render draws from an RNG. A
//! seed gives byte-identical output across runs; without one, a fresh PCG32
//! stream is seeded from OS entropy.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates a PCG32 RNG seeded from OS entropy.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_entropy()
}

/// Creates an RNG from an optional seed.
pub fn rng_for(seed: Option<u32>) -> Pcg32 {
    match seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    }
}

/// Derives a seed for a named component from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the component key, so
/// each stage gets an independent stream from the same job seed.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
