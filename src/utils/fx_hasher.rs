//! A 32-bit variant of rustc's FxHasher, independent of the pointer size.
//!
//! Voxel keys and triangle ids are all made of 32-bit integers so each of them is mixed in
//! with a single rotate-xor-multiply step.

use core::hash::Hasher;
use core::ops::BitXor;

const SEED: u32 = 0x9e3779b9;

/// An FxHasher with an internal state that is always an `u32`.
#[derive(Default, Copy, Clone)]
pub struct FxHasher32 {
    hash: u32,
}

impl FxHasher32 {
    #[inline]
    fn mix(&mut self, word: u32) {
        self.hash = self.hash.rotate_left(5).bitxor(word).wrapping_mul(SEED);
    }
}

impl Hasher for FxHasher32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(4);

        for chunk in &mut chunks {
            self.mix(u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        for byte in chunks.remainder() {
            self.mix(*byte as u32);
        }
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.mix(i);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.mix(i as u32);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.mix(i as u32);
        self.mix((i >> 32) as u32);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}
