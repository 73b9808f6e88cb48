//======================================================================
// src/backends/soft.rs
// Software (scalar) implementation of the Ascon permutation.
//======================================================================

use crate::consts::*;

/// x ^ (x >>> a) ^ (x >>> b)
#[inline(always)]
const fn sigma(x: u64, (a, b): (u32, u32)) -> u64 {
    x ^ x.rotate_right(a) ^ x.rotate_right(b)
}

/// One round: constant addition, bitsliced S-box, linear diffusion.
#[inline(always)]
pub(crate) const fn round(s: [u64; STATE_WORDS], rc: u64) -> [u64; STATE_WORDS] {
    let [mut x0, x1, mut x2, x3, mut x4] = s;

    // 1. pC
    x2 ^= rc;

    // 2. pS, the 5-bit S-box applied to every bit column at once
    x0 ^= x4;
    x4 ^= x3;
    x2 ^= x1;

    let t0 = x0 ^ (!x1 & x2);
    let t1 = x1 ^ (!x2 & x3);
    let t2 = x2 ^ (!x3 & x4);
    let t3 = x3 ^ (!x4 & x0);
    let t4 = x4 ^ (!x0 & x1);

    let y0 = t0 ^ t4;
    let y1 = t1 ^ t0;
    let y2 = !t2;
    let y3 = t3 ^ t2;
    let y4 = t4;

    // 3. pL
    [
        sigma(y0, ROT[0]),
        sigma(y1, ROT[1]),
        sigma(y2, ROT[2]),
        sigma(y3, ROT[3]),
        sigma(y4, ROT[4]),
    ]
}

/// `p^rounds` over a single state. Round counts above 12 are clamped.
#[inline(always)]
pub(crate) const fn permute(mut state: [u64; STATE_WORDS], rounds: usize) -> [u64; STATE_WORDS] {
    let mut i = if rounds < MAX_ROUNDS { MAX_ROUNDS - rounds } else { 0 };
    while i < MAX_ROUNDS {
        state = round(state, RC[i]);
        i += 1;
    }
    state
}

/// Four independent states, one after the other.
#[cfg_attr(feature = "simd", allow(dead_code))]
#[inline]
pub(crate) fn permute_x4(states: &mut [[u64; STATE_WORDS]; 4], rounds: usize) {
    for state in states.iter_mut() {
        *state = permute(*state, rounds);
    }
}
