//======================================================================
// src/cxof.rs
// Ascon-CXOF128: XOF128 with a customization string absorbed ahead of
// the message.
//======================================================================

use crate::consts::CXOF_MAX_CUSTOMIZATION_LEN;
use crate::error::{Error, Result};
use crate::sponge::{Reader, Sponge, SpongeCore};
use crate::variant::{Cxof128, SpongeVariant};
use alloc::vec::Vec;
use core::fmt;
use digest::{
    block_buffer::Eager,
    consts::U8,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, ExtendableOutputCore,
        UpdateCore,
    },
};
use zeroize::{Zeroize, ZeroizeOnDrop};

fn check_customization(customization: &[u8]) -> Result<()> {
    if customization.len() > CXOF_MAX_CUSTOMIZATION_LEN {
        return Err(Error::CustomizationTooLong {
            max: CXOF_MAX_CUSTOMIZATION_LEN,
            actual: customization.len(),
        });
    }
    Ok(())
}

/// Initial sponge with the customization already absorbed: its bit
/// length as one little-endian block, then the string itself, padded.
fn customized(customization: &[u8]) -> Sponge {
    let mut sponge = Sponge::for_variant::<Cxof128>();
    let order = Cxof128::PARAMS.order;
    let bits = (customization.len() as u64) * 8;
    sponge.absorb(&order.store(bits));
    sponge.absorb(customization);
    sponge.pad(Cxof128::PARAMS.rounds_b);
    sponge
}

/// Starts an incremental CXOF sponge; absorb the message, then finalize.
pub fn cxof_sponge(customization: &[u8]) -> Result<Sponge> {
    check_customization(customization)?;
    Ok(customized(customization))
}

/// Ascon-CXOF128. Fails only when `customization` exceeds 256 bytes.
pub fn cxof(msg: &[u8], customization: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let mut out = alloc::vec![0u8; out_len];
    cxof_into(msg, customization, &mut out)?;
    Ok(out)
}

/// [`cxof`] into a caller buffer.
pub fn cxof_into(msg: &[u8], customization: &[u8], out: &mut [u8]) -> Result<()> {
    let mut sponge = cxof_sponge(customization)?;
    sponge.absorb(msg);
    sponge.finalize().squeeze(out);
    Ok(())
}

//======================================================================
// CxofCore - `digest` core carrying a customization
//======================================================================

/// Core behind [`crate::AsconCxof128`]:
/// `AsconCxof128::from_core(CxofCore::new(b"label")?)`.
///
/// The default instance uses the empty customization string.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CxofCore {
    inner: SpongeCore<Cxof128>,
}

impl CxofCore {
    pub fn new(customization: &[u8]) -> Result<Self> {
        let sponge = cxof_sponge(customization)?;
        Ok(Self {
            inner: SpongeCore::from_state(sponge.into_state()),
        })
    }
}

impl Default for CxofCore {
    fn default() -> Self {
        Self {
            inner: SpongeCore::from_state(customized(&[]).into_state()),
        }
    }
}

impl BlockSizeUser for CxofCore {
    type BlockSize = U8;
}

impl BufferKindUser for CxofCore {
    type BufferKind = Eager;
}

impl UpdateCore for CxofCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.inner.update_blocks(blocks);
    }
}

impl ExtendableOutputCore for CxofCore {
    type ReaderCore = Reader<Cxof128>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.inner.finalize_reader(buffer)
    }
}

impl AlgorithmName for CxofCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Cxof128::PARAMS.name)
    }
}

impl fmt::Debug for CxofCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CxofCore { ... }")
    }
}
