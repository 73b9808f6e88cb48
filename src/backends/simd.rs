//======================================================================
// src/backends/simd.rs
// Portable SIMD implementation of the four-lane Ascon permutation.
// Lane `i` of every vector belongs to state `i`.
//======================================================================

use crate::consts::*;
use core::simd::u64x4;

#[inline(always)]
fn rotr(x: u64x4, n: u32) -> u64x4 {
    let n = n as u64;
    (x >> u64x4::splat(n)) | (x << u64x4::splat(64 - n))
}

/// `p^rounds` over four states in lock-step.
#[inline]
pub(crate) fn permute_x4(states: &mut [[u64; STATE_WORDS]; 4], rounds: usize) {
    let mut x: [u64x4; STATE_WORDS] = core::array::from_fn(|w| {
        u64x4::from_array([states[0][w], states[1][w], states[2][w], states[3][w]])
    });

    let start = MAX_ROUNDS - rounds.min(MAX_ROUNDS);
    for &rc in &RC[start..] {
        x[2] ^= u64x4::splat(rc);

        x[0] ^= x[4];
        x[4] ^= x[3];
        x[2] ^= x[1];

        let t0 = x[0] ^ (!x[1] & x[2]);
        let t1 = x[1] ^ (!x[2] & x[3]);
        let t2 = x[2] ^ (!x[3] & x[4]);
        let t3 = x[3] ^ (!x[4] & x[0]);
        let t4 = x[4] ^ (!x[0] & x[1]);

        x[0] = t0 ^ t4;
        x[1] = t1 ^ t0;
        x[2] = !t2;
        x[3] = t3 ^ t2;
        x[4] = t4;

        for (w, &(a, b)) in ROT.iter().enumerate() {
            x[w] ^= rotr(x[w], a) ^ rotr(x[w], b);
        }
    }

    for (lane, state) in states.iter_mut().enumerate() {
        for (w, word) in state.iter_mut().enumerate() {
            *word = x[w][lane];
        }
    }
}
