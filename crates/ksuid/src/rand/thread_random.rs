use ::rand::{RngCore, rng};

use crate::RandSource;

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// The underlying generator is ChaCha-based, seeded from the operating
/// system and periodically reseeded, which makes it suitable for secure
/// tokens as well as KSUID payloads.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// never contend. This type is zero-sized and does not store the RNG; it is
/// `Send + Sync` even though `ThreadRng` itself is not.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl<const N: usize> RandSource<[u8; N]> for ThreadRandom {
    fn rand(&self) -> [u8; N] {
        let mut out = [0; N];
        rng().fill_bytes(&mut out);
        out
    }
}
