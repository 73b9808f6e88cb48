//======================================================================
// src/consts.rs
// Lengths, initialization vectors and domain separators.
//======================================================================

/// Rate of every unkeyed hash/XOF sponge, in bytes.
pub const HASH_RATE: usize = 8;

/// Digest length of Ascon-Hash, Ascon-HashA and Ascon-Hash256.
pub const HASH_DIGEST_LEN: usize = 32;

pub const NONCE_LEN: usize = 16;
pub const TAG_LEN: usize = 16;

/// Key length of Ascon-128, Ascon-128a and Ascon-AEAD128.
pub const KEY_LEN_128: usize = 16;
/// Key length of Ascon-80pq.
pub const KEY_LEN_160: usize = 20;

/// Longest CXOF customization string, 2048 bits.
pub const CXOF_MAX_CUSTOMIZATION_LEN: usize = 256;

/// Key length of Ascon-PRF, Ascon-MAC and Ascon-PRFshort.
pub const PRF_KEY_LEN: usize = 16;
pub const PRF_IN_RATE: usize = 32;
pub const PRF_OUT_RATE: usize = 16;
pub const MAC_TAG_LEN: usize = 16;
/// Longest message and output of Ascon-PRFshort.
pub const PRF_SHORT_MAX_LEN: usize = 16;

// --- Ascon v1.2: k || r || a || a-b || h, big-endian lanes ---
pub const HASH_IV: u64 = 0x00400c0000000100;
pub const HASHA_IV: u64 = 0x00400c0400000100;
pub const XOF_IV: u64 = 0x00400c0000000000;
pub const XOFA_IV: u64 = 0x00400c0400000000;
pub const ASCON128_IV: u64 = 0x80400c0600000000;
pub const ASCON128A_IV: u64 = 0x80800c0800000000;
/// The 32-bit Ascon-80pq IV, already shifted into the top half of word 0.
pub const ASCON80PQ_IV: u64 = 0xa0400c0600000000;

// --- Ascon-PRF family: k || r_out || 2^7 ^ a || 0 || max output bits ---
pub const PRF_IV: u64 = 0x80808c0000000000;
pub const MAC_IV: u64 = 0x80808c0000000080;
/// Ascon-PRFshort; the message bit length is XORed in at bit 48.
pub const PRF_SHORT_IV: u64 = 0x80004c8000000000;

// --- NIST SP 800-232: rate || tag bits || b || a || 0 || id, little-endian lanes ---
pub const AEAD128_IV: u64 = 0x00001000808c0001;
pub const HASH256_IV: u64 = 0x0000080100cc0002;
pub const XOF128_IV: u64 = 0x0000080000cc0003;
pub const CXOF128_IV: u64 = 0x0000080000cc0004;

/// Associated-data/plaintext boundary, XORed into word 4 (Ascon v1.2).
pub const V12_AD_SEPARATOR: u64 = 1;
/// Associated-data/plaintext boundary, XORed into word 4 (SP 800-232).
pub const SP800_232_AD_SEPARATOR: u64 = 1 << 63;
/// Keyed-sponge finalization marker, XORed into word 4.
pub const PRF_FINAL_SEPARATOR: u64 = 1;
