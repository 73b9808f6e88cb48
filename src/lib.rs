//======================================================================
// src/lib.rs
// Crate entry point. The Ascon-p permutation over a 320-bit state.
//======================================================================
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![doc = include_str!("../README.md")]

// --- Module declarations ---
mod backends;
pub mod consts;
mod state;

pub use crate::state::{permute_states_x4, ByteOrder, State};
use crate::consts::STATE_WORDS;

/// Applies `p^rounds` to `state`, using the last `rounds` round constants.
///
/// Total over every input; round counts above 12 behave as 12.
#[inline]
pub fn permute(state: &mut [u64; STATE_WORDS], rounds: usize) {
    *state = backends::permute(*state, rounds);
}

/// [`permute`] over four independent states.
#[inline]
pub fn permute_x4(states: &mut [[u64; STATE_WORDS]; 4], rounds: usize) {
    backends::permute_x4(states, rounds);
}
