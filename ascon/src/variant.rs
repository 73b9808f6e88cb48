//======================================================================
// src/variant.rs
// Parameter sets of every Ascon mode, as plain records and as marker
// types for the typed RustCrypto front ends.
//======================================================================

use crate::consts::*;
use crate::error::Error;
use aead::consts::{U16, U20, U32};
use ascon_perm::{ByteOrder, State};
use core::fmt;
use core::str::FromStr;
use digest::generic_array::ArrayLength;

// --- Parameter records ---

/// Parameters of a sponge: hash, XOF, CXOF or keyed PRF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpongeParams {
    pub name: &'static str,
    pub iv: u64,
    /// Bytes XORed in per absorbed block.
    pub absorb_rate: usize,
    /// Bytes read out per squeezed block.
    pub squeeze_rate: usize,
    pub rounds_a: usize,
    pub rounds_b: usize,
    /// `None` for extendable output.
    pub digest_len: Option<usize>,
    pub order: ByteOrder,
    /// XORed into word 4 right after the final padding. Zero when unkeyed.
    pub final_separator: u64,
}

impl SpongeParams {
    /// `p^a([iv, 0, 0, 0, 0])`.
    pub const fn initial_state(&self) -> State {
        State::from_iv(self.iv, self.rounds_a)
    }
}

/// Parameters of a duplex AEAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuplexParams {
    pub name: &'static str,
    pub iv: u64,
    pub key_len: usize,
    pub rate: usize,
    pub rounds_a: usize,
    pub rounds_b: usize,
    pub order: ByteOrder,
    /// XORed into word 4 once associated data has been absorbed.
    pub ad_separator: u64,
}

impl DuplexParams {
    pub const NONCE_LEN: usize = NONCE_LEN;
    pub const TAG_LEN: usize = TAG_LEN;
}

const fn unkeyed(
    name: &'static str,
    iv: u64,
    rounds_b: usize,
    digest_len: Option<usize>,
    order: ByteOrder,
) -> SpongeParams {
    SpongeParams {
        name,
        iv,
        absorb_rate: HASH_RATE,
        squeeze_rate: HASH_RATE,
        rounds_a: 12,
        rounds_b,
        digest_len,
        order,
        final_separator: 0,
    }
}

pub const HASH: SpongeParams = unkeyed("Ascon-Hash", HASH_IV, 12, Some(HASH_DIGEST_LEN), ByteOrder::Big);
pub const HASHA: SpongeParams = unkeyed("Ascon-HashA", HASHA_IV, 8, Some(HASH_DIGEST_LEN), ByteOrder::Big);
pub const XOF: SpongeParams = unkeyed("Ascon-XOF", XOF_IV, 12, None, ByteOrder::Big);
pub const XOFA: SpongeParams = unkeyed("Ascon-XOFA", XOFA_IV, 8, None, ByteOrder::Big);
pub const HASH256: SpongeParams =
    unkeyed("Ascon-Hash256", HASH256_IV, 12, Some(HASH_DIGEST_LEN), ByteOrder::Little);
pub const XOF128: SpongeParams = unkeyed("Ascon-XOF128", XOF128_IV, 12, None, ByteOrder::Little);
pub const CXOF128: SpongeParams = unkeyed("Ascon-CXOF128", CXOF128_IV, 12, None, ByteOrder::Little);

pub const PRF: SpongeParams = SpongeParams {
    name: "Ascon-PRF",
    iv: PRF_IV,
    absorb_rate: PRF_IN_RATE,
    squeeze_rate: PRF_OUT_RATE,
    rounds_a: 12,
    rounds_b: 12,
    digest_len: None,
    order: ByteOrder::Big,
    final_separator: PRF_FINAL_SEPARATOR,
};

pub const MAC: SpongeParams = SpongeParams {
    name: "Ascon-MAC",
    iv: MAC_IV,
    digest_len: Some(MAC_TAG_LEN),
    ..PRF
};

pub const ASCON128: DuplexParams = DuplexParams {
    name: "Ascon-128",
    iv: ASCON128_IV,
    key_len: KEY_LEN_128,
    rate: 8,
    rounds_a: 12,
    rounds_b: 6,
    order: ByteOrder::Big,
    ad_separator: V12_AD_SEPARATOR,
};

pub const ASCON128A: DuplexParams = DuplexParams {
    name: "Ascon-128a",
    iv: ASCON128A_IV,
    rate: 16,
    rounds_b: 8,
    ..ASCON128
};

pub const ASCON80PQ: DuplexParams = DuplexParams {
    name: "Ascon-80pq",
    iv: ASCON80PQ_IV,
    key_len: KEY_LEN_160,
    ..ASCON128
};

pub const AEAD128: DuplexParams = DuplexParams {
    name: "Ascon-AEAD128",
    iv: AEAD128_IV,
    key_len: KEY_LEN_128,
    rate: 16,
    rounds_a: 12,
    rounds_b: 8,
    order: ByteOrder::Little,
    ad_separator: SP800_232_AD_SEPARATOR,
};

// --- Marker traits ---

/// An unkeyed sponge instance.
pub trait SpongeVariant: Sized + Clone + Send + Sync + 'static {
    const PARAMS: SpongeParams;
    /// Precomputed at compile time.
    const INITIAL_STATE: State = Self::PARAMS.initial_state();
}

/// A sponge with a fixed-length digest.
pub trait FixedOutputVariant: SpongeVariant {
    type OutputSize: ArrayLength<u8> + 'static;
}

/// A sponge with extendable output and no customization input.
pub trait XofVariant: SpongeVariant {}

/// A sponge keyed by a 128-bit key in words 1 and 2.
pub trait KeyedVariant: Sized + Clone + Send + Sync + 'static {
    const PARAMS: SpongeParams;
}

/// A duplex AEAD instance.
pub trait DuplexVariant: Sized + Clone + Send + Sync + 'static {
    type KeySize: ArrayLength<u8>;
    const PARAMS: DuplexParams;
}

macro_rules! sponge_variant {
    ($(#[$meta:meta])* $name:ident, $params:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;
        impl SpongeVariant for $name {
            const PARAMS: SpongeParams = $params;
        }
    };
}

sponge_variant!(
    /// Ascon-Hash (v1.2).
    Hash, HASH
);
sponge_variant!(
    /// Ascon-HashA (v1.2), eight intermediate rounds.
    HashA, HASHA
);
sponge_variant!(
    /// Ascon-Hash256 (SP 800-232).
    Hash256, HASH256
);
sponge_variant!(
    /// Ascon-XOF (v1.2).
    Xof, XOF
);
sponge_variant!(
    /// Ascon-XOFA (v1.2), eight intermediate rounds.
    XofA, XOFA
);
sponge_variant!(
    /// Ascon-XOF128 (SP 800-232).
    Xof128, XOF128
);
sponge_variant!(
    /// Ascon-CXOF128 (SP 800-232). Only usable through [`crate::cxof`].
    Cxof128, CXOF128
);

impl FixedOutputVariant for Hash {
    type OutputSize = U32;
}
impl FixedOutputVariant for HashA {
    type OutputSize = U32;
}
impl FixedOutputVariant for Hash256 {
    type OutputSize = U32;
}
impl XofVariant for Xof {}
impl XofVariant for XofA {}
impl XofVariant for Xof128 {}

/// Ascon-PRF: 32-byte input blocks, 16-byte output blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prf;
impl KeyedVariant for Prf {
    const PARAMS: SpongeParams = PRF;
}

/// Ascon-MAC: Ascon-PRF truncated to a 128-bit tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mac;
impl KeyedVariant for Mac {
    const PARAMS: SpongeParams = MAC;
}

/// Ascon-128 (v1.2).
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascon128;
impl DuplexVariant for Ascon128 {
    type KeySize = U16;
    const PARAMS: DuplexParams = ASCON128;
}

/// Ascon-128a (v1.2).
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascon128a;
impl DuplexVariant for Ascon128a {
    type KeySize = U16;
    const PARAMS: DuplexParams = ASCON128A;
}

/// Ascon-80pq (v1.2), 160-bit key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascon80pq;
impl DuplexVariant for Ascon80pq {
    type KeySize = U20;
    const PARAMS: DuplexParams = ASCON80PQ;
}

/// Ascon-AEAD128 (SP 800-232).
#[derive(Clone, Copy, Debug, Default)]
pub struct AsconAead128;
impl DuplexVariant for AsconAead128 {
    type KeySize = U16;
    const PARAMS: DuplexParams = AEAD128;
}

// --- Runtime selection ---

/// AEAD variant chosen at run time, e.g. from a KAT file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AeadVariant {
    Ascon128,
    Ascon128a,
    Ascon80pq,
    AsconAead128,
}

impl AeadVariant {
    pub const ALL: [AeadVariant; 4] = [
        AeadVariant::Ascon128,
        AeadVariant::Ascon128a,
        AeadVariant::Ascon80pq,
        AeadVariant::AsconAead128,
    ];

    pub const fn params(self) -> &'static DuplexParams {
        match self {
            AeadVariant::Ascon128 => &ASCON128,
            AeadVariant::Ascon128a => &ASCON128A,
            AeadVariant::Ascon80pq => &ASCON80PQ,
            AeadVariant::AsconAead128 => &AEAD128,
        }
    }

    pub const fn key_len(self) -> usize {
        self.params().key_len
    }

    pub const fn name(self) -> &'static str {
        self.params().name
    }
}

impl fmt::Display for AeadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AeadVariant {
    type Err = Error;

    /// Accepts the canonical names and the short `AEAD-*` aliases,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Error> {
        const NAMES: [(&str, AeadVariant); 8] = [
            ("ascon-128", AeadVariant::Ascon128),
            ("aead-128", AeadVariant::Ascon128),
            ("ascon-128a", AeadVariant::Ascon128a),
            ("aead-128a", AeadVariant::Ascon128a),
            ("ascon-80pq", AeadVariant::Ascon80pq),
            ("aead-80pq", AeadVariant::Ascon80pq),
            ("ascon-aead128", AeadVariant::AsconAead128),
            ("aead128", AeadVariant::AsconAead128),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|&(_, v)| v)
            .ok_or(Error::UnknownAlgorithm)
    }
}
