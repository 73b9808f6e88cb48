//======================================================================
// src/consts.rs
// Constants of the Ascon-p permutation.
//======================================================================

/// Number of 64-bit words in the state.
pub const STATE_WORDS: usize = 5;

/// The internal state size in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 8;

/// Largest supported round count, `p^12`.
pub const MAX_ROUNDS: usize = 12;

/// Round constants, added to word 2. A `p^r` call uses the last `r` entries.
pub const RC: [u64; MAX_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Right-rotation amounts of the linear layer, one pair per word.
pub const ROT: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];
