//======================================================================
// src/state.rs
// The 320-bit permutation state and its byte-level views.
//======================================================================

use crate::backends;
use crate::consts::{STATE_BYTES, STATE_WORDS};
use core::ops::{Index, IndexMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How the bytes of a rate block map onto the 64-bit state words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Byte 0 is the most significant byte of word 0 (Ascon v1.2).
    Big,
    /// Byte 0 is the least significant byte of word 0 (NIST SP 800-232).
    Little,
}

impl ByteOrder {
    #[inline(always)]
    const fn shift(self, i: usize) -> u32 {
        match self {
            ByteOrder::Big => (56 - 8 * i) as u32,
            ByteOrder::Little => (8 * i) as u32,
        }
    }

    /// The padding byte: a single one bit immediately after the data.
    #[inline(always)]
    pub const fn pad_byte(self) -> u8 {
        match self {
            ByteOrder::Big => 0x80,
            ByteOrder::Little => 0x01,
        }
    }

    #[inline(always)]
    pub const fn load(self, bytes: [u8; 8]) -> u64 {
        match self {
            ByteOrder::Big => u64::from_be_bytes(bytes),
            ByteOrder::Little => u64::from_le_bytes(bytes),
        }
    }

    #[inline(always)]
    pub const fn store(self, word: u64) -> [u8; 8] {
        match self {
            ByteOrder::Big => word.to_be_bytes(),
            ByteOrder::Little => word.to_le_bytes(),
        }
    }
}

/// The Ascon state: five 64-bit words, wiped on drop.
///
/// Byte positions `0..40` address the state as one byte string in the
/// given [`ByteOrder`]; sponge and duplex modes only ever touch the first
/// `rate` of them.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct State([u64; STATE_WORDS]);

impl State {
    pub const fn new(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// `p^rounds([iv, 0, 0, 0, 0])`, usable in constant context.
    pub const fn from_iv(iv: u64, rounds: usize) -> Self {
        Self(backends::permute([iv, 0, 0, 0, 0], rounds))
    }

    pub const fn words(&self) -> [u64; STATE_WORDS] {
        self.0
    }

    /// Applies `p^rounds` in place.
    #[inline]
    pub fn permute(&mut self, rounds: usize) {
        self.0 = backends::permute(self.0, rounds);
    }

    #[inline(always)]
    pub fn byte(&self, pos: usize, order: ByteOrder) -> u8 {
        (self.0[pos / 8] >> order.shift(pos % 8)) as u8
    }

    #[inline(always)]
    pub fn xor_byte(&mut self, pos: usize, byte: u8, order: ByteOrder) {
        self.0[pos / 8] ^= (byte as u64) << order.shift(pos % 8);
    }

    /// XORs `bytes` into the state starting at byte position `offset`.
    #[inline]
    pub fn xor_bytes(&mut self, offset: usize, bytes: &[u8], order: ByteOrder) {
        debug_assert!(offset + bytes.len() <= STATE_BYTES);
        for (i, &b) in bytes.iter().enumerate() {
            self.xor_byte(offset + i, b, order);
        }
    }

    /// Copies state bytes starting at position `offset` into `out`.
    #[inline]
    pub fn extract_bytes(&self, offset: usize, out: &mut [u8], order: ByteOrder) {
        debug_assert!(offset + out.len() <= STATE_BYTES);
        for (i, b) in out.iter_mut().enumerate() {
            *b = self.byte(offset + i, order);
        }
    }
}

impl From<[u64; STATE_WORDS]> for State {
    fn from(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }
}

impl Index<usize> for State {
    type Output = u64;

    #[inline(always)]
    fn index(&self, idx: usize) -> &u64 {
        &self.0[idx]
    }
}

impl IndexMut<usize> for State {
    #[inline(always)]
    fn index_mut(&mut self, idx: usize) -> &mut u64 {
        &mut self.0[idx]
    }
}

/// Applies `p^rounds` to four independent states, through the SIMD
/// backend when the `simd` feature is on.
pub fn permute_states_x4(states: &mut [State; 4], rounds: usize) {
    let mut words = [states[0].0, states[1].0, states[2].0, states[3].0];
    backends::permute_x4(&mut words, rounds);
    for (state, w) in states.iter_mut().zip(words.iter()) {
        state.0 = *w;
    }
    words.zeroize();
}
