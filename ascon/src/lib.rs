#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// --- Module declarations ---
pub mod aead;
pub mod batch;
pub mod consts;
mod ct;
pub mod cxof;
pub mod error;
pub mod prf;
pub mod sponge;
pub mod variant;

use crate::variant::{
    Ascon128, Ascon128a, Ascon80pq, AsconAead128, Cxof128, Hash, Hash256, HashA, Mac, Prf,
    Xof, Xof128, XofA,
};
use digest::core_api::{CoreWrapper, XofReaderCoreWrapper};

pub use crate::aead::{
    ciphertext_tag, decrypt, decrypt_in_place_detached, encrypt, encrypt_in_place_detached,
};
pub use crate::batch::{hash_x4, xof_x4};
pub use crate::cxof::{cxof, cxof_into};
pub use crate::error::{Error, Result};
pub use crate::prf::{mac, mac_verify, prf, prf_short, prf_short_verify};
pub use crate::sponge::{hash, hash256, hash_a, xof, xof128, xof_a, Sponge, Squeezer};
pub use crate::variant::AeadVariant;

pub use ::aead as aead_api;
pub use ascon_perm;
pub use digest;


// -- Hash / XOF aliases --
pub type AsconHash = CoreWrapper<sponge::SpongeCore<Hash>>;
pub type AsconHashA = CoreWrapper<sponge::SpongeCore<HashA>>;
pub type AsconHash256 = CoreWrapper<sponge::SpongeCore<Hash256>>;
pub type AsconXof = CoreWrapper<sponge::SpongeCore<Xof>>;
pub type AsconXofA = CoreWrapper<sponge::SpongeCore<XofA>>;
pub type AsconXof128 = CoreWrapper<sponge::SpongeCore<Xof128>>;
pub type AsconCxof128 = CoreWrapper<cxof::CxofCore>;
pub type AsconXofReader = XofReaderCoreWrapper<sponge::Reader<Xof>>;
pub type AsconXofAReader = XofReaderCoreWrapper<sponge::Reader<XofA>>;
pub type AsconXof128Reader = XofReaderCoreWrapper<sponge::Reader<Xof128>>;
pub type AsconCxof128Reader = XofReaderCoreWrapper<sponge::Reader<Cxof128>>;

// -- Keyed aliases --
pub type AsconPrf = CoreWrapper<prf::KeyedCore<Prf>>;
pub type AsconMac = CoreWrapper<prf::KeyedCore<Mac>>;
pub type AsconPrfReader = XofReaderCoreWrapper<prf::KeyedReader<Prf>>;

// -- AEAD aliases --
pub type Ascon128Cipher = aead::AsconAead<Ascon128>;
pub type Ascon128aCipher = aead::AsconAead<Ascon128a>;
pub type Ascon80pqCipher = aead::AsconAead<Ascon80pq>;
pub type AsconAead128Cipher = aead::AsconAead<AsconAead128>;
