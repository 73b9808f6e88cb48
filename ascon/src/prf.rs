//======================================================================
// src/prf.rs
// Keyed sponges: Ascon-PRF, Ascon-MAC and the single-permutation
// Ascon-PRFshort.
//======================================================================

use crate::consts::{MAC_TAG_LEN, PRF_KEY_LEN, PRF_SHORT_IV, PRF_SHORT_MAX_LEN};
use crate::ct;
use crate::error::{Error, Result};
use crate::sponge::Sponge;
use crate::variant::{self, KeyedVariant, SpongeParams};
use alloc::vec::Vec;
use ascon_perm::{ByteOrder, State};
use core::{fmt, marker::PhantomData};
use digest::{
    block_buffer::Eager,
    consts::{U16, U32},
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, ExtendableOutputCore,
        FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
    },
    crypto_common::{Key, KeyInit, KeySizeUser},
    MacMarker, Output,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

fn key_words(key: &[u8]) -> Result<[u64; 2]> {
    if key.len() != PRF_KEY_LEN {
        return Err(Error::InvalidKeyLength {
            expected: PRF_KEY_LEN,
            actual: key.len(),
        });
    }
    Ok(key_words_exact(key))
}

fn key_words_exact(key: &[u8]) -> [u64; 2] {
    let mut k0 = [0u8; 8];
    let mut k1 = [0u8; 8];
    k0.copy_from_slice(&key[..8]);
    k1.copy_from_slice(&key[8..16]);
    [ByteOrder::Big.load(k0), ByteOrder::Big.load(k1)]
}

/// `p^a([iv, k0, k1, 0, 0])`.
fn keyed_state(params: &SpongeParams, key: [u64; 2]) -> State {
    let mut state = State::new([params.iv, key[0], key[1], 0, 0]);
    state.permute(params.rounds_a);
    state
}

/// A keyed sponge ready to absorb, for incremental Ascon-PRF/MAC use.
pub fn keyed_sponge<V: KeyedVariant>(key: &[u8]) -> Result<Sponge> {
    let key = key_words(key)?;
    Ok(Sponge::with_state(V::PARAMS, keyed_state(&V::PARAMS, key)))
}

/// Ascon-PRF with `out_len` bytes of output.
pub fn prf(key: &[u8], msg: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let mut sponge = keyed_sponge::<variant::Prf>(key)?;
    sponge.absorb(msg);
    let mut out = alloc::vec![0u8; out_len];
    sponge.finalize().squeeze(&mut out);
    Ok(out)
}

/// Ascon-MAC: a 128-bit tag.
pub fn mac(key: &[u8], msg: &[u8]) -> Result<[u8; MAC_TAG_LEN]> {
    let mut sponge = keyed_sponge::<variant::Mac>(key)?;
    sponge.absorb(msg);
    let mut tag = [0u8; MAC_TAG_LEN];
    sponge.finalize().squeeze(&mut tag);
    Ok(tag)
}

/// Recomputes the Ascon-MAC tag and compares in constant time.
pub fn mac_verify(key: &[u8], msg: &[u8], tag: &[u8]) -> Result<bool> {
    if tag.len() != MAC_TAG_LEN {
        return Err(Error::InvalidTagLength {
            expected: MAC_TAG_LEN,
            actual: tag.len(),
        });
    }
    let mut expected = mac(key, msg)?;
    let ok = ct::tags_match(&expected, tag);
    expected.zeroize();
    Ok(ok.into())
}

/// Ascon-PRFshort into `out`: one `p^12` over a message of at most 16
/// bytes, yielding at most 16 bytes.
pub fn prf_short_into(key: &[u8], msg: &[u8], out: &mut [u8]) -> Result<()> {
    let key = key_words(key)?;
    if msg.len() > PRF_SHORT_MAX_LEN {
        return Err(Error::MessageTooLong {
            max: PRF_SHORT_MAX_LEN,
            actual: msg.len(),
        });
    }
    if out.len() > PRF_SHORT_MAX_LEN {
        return Err(Error::OutputTooLong {
            max: PRF_SHORT_MAX_LEN,
            actual: out.len(),
        });
    }
    let order = ByteOrder::Big;
    let mut state = State::new([
        PRF_SHORT_IV ^ (((msg.len() * 8) as u64) << 48),
        key[0],
        key[1],
        0,
        0,
    ]);
    state.xor_bytes(24, msg, order);
    state.permute(12);
    state[3] ^= key[0];
    state[4] ^= key[1];
    // Output is the trailing `out.len()` bytes of words 3 and 4.
    state.extract_bytes(24 + PRF_SHORT_MAX_LEN - out.len(), out, order);
    Ok(())
}

/// Ascon-PRFshort with `out_len` (at most 16) bytes of output.
pub fn prf_short(key: &[u8], msg: &[u8], out_len: usize) -> Result<Vec<u8>> {
    if out_len > PRF_SHORT_MAX_LEN {
        return Err(Error::OutputTooLong {
            max: PRF_SHORT_MAX_LEN,
            actual: out_len,
        });
    }
    let mut out = alloc::vec![0u8; out_len];
    prf_short_into(key, msg, &mut out)?;
    Ok(out)
}

/// Verifies an Ascon-PRFshort tag of `tag.len()` bytes in constant time.
pub fn prf_short_verify(key: &[u8], msg: &[u8], tag: &[u8]) -> Result<bool> {
    if tag.is_empty() || tag.len() > PRF_SHORT_MAX_LEN {
        return Err(Error::InvalidTagLength {
            expected: PRF_SHORT_MAX_LEN,
            actual: tag.len(),
        });
    }
    let mut buf = [0u8; PRF_SHORT_MAX_LEN];
    let expected = &mut buf[..tag.len()];
    prf_short_into(key, msg, expected)?;
    let ok = ct::tags_match(expected, tag);
    expected.zeroize();
    Ok(ok.into())
}

//======================================================================
// KeyedCore - `digest` core for Ascon-PRF and Ascon-MAC
//======================================================================

/// Block-level core behind [`crate::AsconPrf`] and [`crate::AsconMac`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyedCore<V: KeyedVariant> {
    state: State,
    _variant: PhantomData<V>,
}

impl<V: KeyedVariant> KeyedCore<V> {
    fn finalize_reader(&mut self, buffer: &mut Buffer<Self>) -> KeyedReader<V> {
        let order = V::PARAMS.order;
        let tail = buffer.get_data();
        self.state.xor_bytes(0, tail, order);
        self.state.xor_byte(tail.len(), order.pad_byte(), order);
        self.state[4] ^= V::PARAMS.final_separator;
        self.state.permute(V::PARAMS.rounds_a);
        KeyedReader {
            state: self.state.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: KeyedVariant> KeySizeUser for KeyedCore<V> {
    type KeySize = U16;
}

impl<V: KeyedVariant> KeyInit for KeyedCore<V> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            state: keyed_state(&V::PARAMS, key_words_exact(key)),
            _variant: PhantomData,
        }
    }
}

impl<V: KeyedVariant> BlockSizeUser for KeyedCore<V> {
    type BlockSize = U32;
}

impl<V: KeyedVariant> BufferKindUser for KeyedCore<V> {
    type BufferKind = Eager;
}

impl<V: KeyedVariant> UpdateCore for KeyedCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.state.xor_bytes(0, block, V::PARAMS.order);
            self.state.permute(V::PARAMS.rounds_b);
        }
    }
}

impl ExtendableOutputCore for KeyedCore<variant::Prf> {
    type ReaderCore = KeyedReader<variant::Prf>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.finalize_reader(buffer)
    }
}

impl OutputSizeUser for KeyedCore<variant::Mac> {
    type OutputSize = U16;
}

impl FixedOutputCore for KeyedCore<variant::Mac> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let block = self.finalize_reader(buffer).read_block();
        out.copy_from_slice(&block);
    }
}

impl MacMarker for KeyedCore<variant::Mac> {}

impl<V: KeyedVariant> AlgorithmName for KeyedCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::PARAMS.name)
    }
}

impl<V: KeyedVariant> fmt::Debug for KeyedCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyedCore<{}> {{ ... }}", V::PARAMS.name)
    }
}

/// Squeezes 16-byte blocks out of a finalized keyed sponge.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyedReader<V: KeyedVariant> {
    state: State,
    _variant: PhantomData<V>,
}

impl<V: KeyedVariant> BlockSizeUser for KeyedReader<V> {
    type BlockSize = U16;
}

impl<V: KeyedVariant> XofReaderCore for KeyedReader<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        self.state.extract_bytes(0, &mut block, V::PARAMS.order);
        self.state.permute(V::PARAMS.rounds_b);
        block
    }
}

impl<V: KeyedVariant> fmt::Debug for KeyedReader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyedReader<{}> {{ ... }}", V::PARAMS.name)
    }
}
