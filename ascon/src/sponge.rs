//======================================================================
// src/sponge.rs
// Sponge engine for Ascon-Hash/HashA/Hash256 and Ascon-XOF/XOFA/XOF128,
// plus the `digest` core types built on it.
//======================================================================

use crate::consts::HASH_DIGEST_LEN;
use crate::variant::{self, FixedOutputVariant, SpongeParams, SpongeVariant, XofVariant};
use alloc::vec::Vec;
use ascon_perm::State;
use core::{fmt, marker::PhantomData, mem};
use digest::{
    block_buffer::Eager,
    consts::U8,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, ExtendableOutputCore,
        FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
    },
    HashMarker, Output, Reset,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

//======================================================================
// Sponge / Squeezer - byte-oriented engine
//======================================================================

/// A sponge in its absorbing phase.
///
/// Input may arrive in any number of [`absorb`](Self::absorb) calls; only
/// the concatenation matters. [`finalize`](Self::finalize) consumes the
/// sponge, so absorbing after squeezing does not type-check.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: State,
    /// Bytes of the current block already absorbed.
    offset: usize,
    #[zeroize(skip)]
    params: SpongeParams,
}

impl Sponge {
    /// Starts from `p^a([iv, 0, 0, 0, 0])`.
    pub fn new(params: SpongeParams) -> Self {
        Self::with_state(params, params.initial_state())
    }

    /// Starts from the variant's compile-time initial state.
    pub fn for_variant<V: SpongeVariant>() -> Self {
        Self::with_state(V::PARAMS, V::INITIAL_STATE)
    }

    /// Starts from an already initialized state, e.g. a keyed one.
    pub fn with_state(params: SpongeParams, state: State) -> Self {
        Self {
            state,
            offset: 0,
            params,
        }
    }

    pub fn params(&self) -> &SpongeParams {
        &self.params
    }

    /// XORs `data` into the rate, applying `p^b` after each full block.
    pub fn absorb(&mut self, mut data: &[u8]) {
        let SpongeParams {
            absorb_rate: rate,
            order,
            rounds_b,
            ..
        } = self.params;
        while !data.is_empty() {
            let take = (rate - self.offset).min(data.len());
            let (head, rest) = data.split_at(take);
            self.state.xor_bytes(self.offset, head, order);
            self.offset += take;
            data = rest;
            if self.offset == rate {
                self.state.permute(rounds_b);
                self.offset = 0;
            }
        }
    }

    /// Closes the pending (possibly empty) block with the pad byte and the
    /// final separator, then applies `p^rounds`.
    pub(crate) fn pad(&mut self, rounds: usize) {
        let order = self.params.order;
        self.state.xor_byte(self.offset, order.pad_byte(), order);
        self.state[4] ^= self.params.final_separator;
        self.state.permute(rounds);
        self.offset = 0;
    }

    /// Hands over the state; only valid on a block boundary.
    pub(crate) fn into_state(mut self) -> State {
        debug_assert_eq!(self.offset, 0);
        mem::take(&mut self.state)
    }

    /// Pads, applies `p^a` and switches to squeezing.
    pub fn finalize(mut self) -> Squeezer {
        self.pad(self.params.rounds_a);
        Squeezer {
            state: mem::take(&mut self.state),
            readable: self.params.squeeze_rate,
            params: self.params,
        }
    }
}

/// A sponge in its squeezing phase.
///
/// Successive [`squeeze`](Self::squeeze) calls continue one output
/// stream, so any split of the reads yields the same bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Squeezer {
    state: State,
    /// Bytes of the current rate block not yet read.
    readable: usize,
    #[zeroize(skip)]
    params: SpongeParams,
}

impl Squeezer {
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let SpongeParams {
            squeeze_rate: rate,
            order,
            rounds_b,
            ..
        } = self.params;
        let mut written = 0;
        while written < out.len() {
            if self.readable == 0 {
                self.state.permute(rounds_b);
                self.readable = rate;
            }
            let take = self.readable.min(out.len() - written);
            self.state
                .extract_bytes(rate - self.readable, &mut out[written..written + take], order);
            self.readable -= take;
            written += take;
        }
    }
}

// --- One-shot functions ---

fn digest_into<V: SpongeVariant>(msg: &[u8], out: &mut [u8]) {
    let mut sponge = Sponge::for_variant::<V>();
    sponge.absorb(msg);
    sponge.finalize().squeeze(out);
}

fn fixed<V: FixedOutputVariant>(msg: &[u8]) -> [u8; HASH_DIGEST_LEN] {
    let mut out = [0u8; HASH_DIGEST_LEN];
    digest_into::<V>(msg, &mut out);
    out
}

fn extendable<V: XofVariant>(msg: &[u8], out_len: usize) -> Vec<u8> {
    let mut out = alloc::vec![0u8; out_len];
    digest_into::<V>(msg, &mut out);
    out
}

/// Ascon-Hash (v1.2).
pub fn hash(msg: &[u8]) -> [u8; HASH_DIGEST_LEN] {
    fixed::<variant::Hash>(msg)
}

/// Ascon-HashA (v1.2).
pub fn hash_a(msg: &[u8]) -> [u8; HASH_DIGEST_LEN] {
    fixed::<variant::HashA>(msg)
}

/// Ascon-Hash256 (SP 800-232).
pub fn hash256(msg: &[u8]) -> [u8; HASH_DIGEST_LEN] {
    fixed::<variant::Hash256>(msg)
}

/// Ascon-XOF (v1.2). Output for a shorter length is a prefix of a longer one.
pub fn xof(msg: &[u8], out_len: usize) -> Vec<u8> {
    extendable::<variant::Xof>(msg, out_len)
}

/// Ascon-XOFA (v1.2).
pub fn xof_a(msg: &[u8], out_len: usize) -> Vec<u8> {
    extendable::<variant::XofA>(msg, out_len)
}

/// Ascon-XOF128 (SP 800-232).
pub fn xof128(msg: &[u8], out_len: usize) -> Vec<u8> {
    extendable::<variant::Xof128>(msg, out_len)
}

//======================================================================
// SpongeCore - `digest` block-level core
//======================================================================

/// Block-level core behind the `digest` wrappers. Use it through
/// [`crate::AsconHash`], [`crate::AsconXof`] and friends.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpongeCore<V: SpongeVariant> {
    state: State,
    _variant: PhantomData<V>,
}

impl<V: SpongeVariant> SpongeCore<V> {
    pub(crate) fn from_state(state: State) -> Self {
        Self {
            state,
            _variant: PhantomData,
        }
    }

    fn absorb_block(&mut self, block: &Block<Self>) {
        self.state.xor_bytes(0, block, V::PARAMS.order);
        self.state.permute(V::PARAMS.rounds_b);
    }

    pub(crate) fn finalize_reader(&mut self, buffer: &mut Buffer<Self>) -> Reader<V> {
        let order = V::PARAMS.order;
        let tail = buffer.get_data();
        self.state.xor_bytes(0, tail, order);
        self.state.xor_byte(tail.len(), order.pad_byte(), order);
        self.state.permute(V::PARAMS.rounds_a);
        Reader {
            state: self.state.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: SpongeVariant> Default for SpongeCore<V> {
    fn default() -> Self {
        Self::from_state(V::INITIAL_STATE)
    }
}

impl<V: SpongeVariant> HashMarker for SpongeCore<V> {}

impl<V: SpongeVariant> BlockSizeUser for SpongeCore<V> {
    type BlockSize = U8;
}

impl<V: SpongeVariant> BufferKindUser for SpongeCore<V> {
    type BufferKind = Eager;
}

impl<V: SpongeVariant> UpdateCore for SpongeCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_block(block);
        }
    }
}

impl<V: FixedOutputVariant> OutputSizeUser for SpongeCore<V> {
    type OutputSize = V::OutputSize;
}

impl<V: FixedOutputVariant> FixedOutputCore for SpongeCore<V> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut reader = self.finalize_reader(buffer);
        for chunk in out.chunks_mut(V::PARAMS.squeeze_rate) {
            let block = reader.read_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

impl<V: XofVariant> ExtendableOutputCore for SpongeCore<V> {
    type ReaderCore = Reader<V>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.finalize_reader(buffer)
    }
}

impl<V: SpongeVariant> Reset for SpongeCore<V> {
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<V: SpongeVariant> AlgorithmName for SpongeCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::PARAMS.name)
    }
}

impl<V: SpongeVariant> fmt::Debug for SpongeCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpongeCore<{}> {{ ... }}", V::PARAMS.name)
    }
}

//======================================================================
// Reader - squeezing side of the `digest` core
//======================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Reader<V: SpongeVariant> {
    state: State,
    _variant: PhantomData<V>,
}

impl<V: SpongeVariant> BlockSizeUser for Reader<V> {
    type BlockSize = U8;
}

impl<V: SpongeVariant> XofReaderCore for Reader<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        self.state.extract_bytes(0, &mut block, V::PARAMS.order);
        self.state.permute(V::PARAMS.rounds_b);
        block
    }
}

impl<V: SpongeVariant> fmt::Debug for Reader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reader<{}> {{ ... }}", V::PARAMS.name)
    }
}
