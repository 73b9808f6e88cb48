//======================================================================
// src/aead.rs
// Ascon duplex AEAD: Ascon-128, Ascon-128a, Ascon-80pq (v1.2) and
// Ascon-AEAD128 (SP 800-232).
//
// Decryption feeds the ciphertext back into the rate exactly as
// encryption does, so both directions walk through identical states.
//======================================================================

use crate::consts::{NONCE_LEN, TAG_LEN};
use crate::ct;
use crate::error::{Error, Result};
use crate::variant::{AeadVariant, DuplexParams, DuplexVariant};
use alloc::vec::Vec;
use ascon_perm::{ByteOrder, State};
use core::marker::PhantomData;
use aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

// --- Key material ---

/// The key as the duplex injects it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeyWords {
    /// Right-aligned over words 0..3: initialization and tag.
    right: [u64; 3],
    /// Left-aligned over three words: finalization.
    left: [u64; 3],
}

fn load_word(order: ByteOrder, bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    order.load(buf)
}

fn load_half(order: ByteOrder, bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    match order {
        ByteOrder::Big => u32::from_be_bytes(buf) as u64,
        ByteOrder::Little => u32::from_le_bytes(buf) as u64,
    }
}

impl KeyWords {
    fn load(params: &DuplexParams, key: &[u8]) -> Result<Self> {
        if key.len() != params.key_len {
            return Err(Error::InvalidKeyLength {
                expected: params.key_len,
                actual: key.len(),
            });
        }
        Ok(Self::from_exact(params.order, key))
    }

    /// `key` is 16 or 20 bytes.
    fn from_exact(order: ByteOrder, key: &[u8]) -> Self {
        let k0 = load_word(order, &key[..8]);
        let k1 = load_word(order, &key[8..16]);
        if key.len() == 16 {
            return Self {
                right: [0, k0, k1],
                left: [k0, k1, 0],
            };
        }
        let k2 = load_half(order, &key[16..20]);
        Self {
            right: [k0 >> 32, (k0 << 32) | (k1 >> 32), (k1 << 32) | k2],
            left: [k0, k1, k2 << 32],
        }
    }
}

fn nonce_array(nonce: &[u8]) -> Result<[u8; NONCE_LEN]> {
    <[u8; NONCE_LEN]>::try_from(nonce).map_err(|_| Error::InvalidNonceLength {
        expected: NONCE_LEN,
        actual: nonce.len(),
    })
}

fn tag_array(tag: &[u8]) -> Result<[u8; TAG_LEN]> {
    <[u8; TAG_LEN]>::try_from(tag).map_err(|_| Error::InvalidTagLength {
        expected: TAG_LEN,
        actual: tag.len(),
    })
}

// --- Duplex engine ---

#[derive(Zeroize, ZeroizeOnDrop)]
struct Duplex<'k> {
    state: State,
    #[zeroize(skip)]
    params: DuplexParams,
    #[zeroize(skip)]
    key: &'k KeyWords,
}

impl<'k> Duplex<'k> {
    fn start(params: DuplexParams, key: &'k KeyWords, nonce: &[u8; NONCE_LEN]) -> Self {
        let order = params.order;
        let mut state = State::new([
            params.iv ^ key.right[0],
            key.right[1],
            key.right[2],
            load_word(order, &nonce[..8]),
            load_word(order, &nonce[8..]),
        ]);
        state.permute(params.rounds_a);
        state[2] ^= key.right[0];
        state[3] ^= key.right[1];
        state[4] ^= key.right[2];
        Self { state, params, key }
    }

    /// Absorbs `ad` (skipped entirely when empty) and then flips the
    /// domain separator, which happens even for empty `ad`.
    fn absorb_associated_data(&mut self, ad: &[u8]) {
        let DuplexParams {
            rate,
            order,
            rounds_b,
            ad_separator,
            ..
        } = self.params;
        if !ad.is_empty() {
            let mut blocks = ad.chunks_exact(rate);
            for block in &mut blocks {
                self.state.xor_bytes(0, block, order);
                self.state.permute(rounds_b);
            }
            let tail = blocks.remainder();
            self.state.xor_bytes(0, tail, order);
            self.state.xor_byte(tail.len(), order.pad_byte(), order);
            self.state.permute(rounds_b);
        }
        self.state[4] ^= ad_separator;
    }

    fn encrypt(&mut self, buffer: &mut [u8]) {
        let DuplexParams {
            rate,
            order,
            rounds_b,
            ..
        } = self.params;
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            self.state.xor_bytes(0, block, order);
            self.state.extract_bytes(0, block, order);
            self.state.permute(rounds_b);
        }
        let tail = blocks.into_remainder();
        self.state.xor_bytes(0, tail, order);
        self.state.extract_bytes(0, tail, order);
        self.state.xor_byte(tail.len(), order.pad_byte(), order);
    }

    fn decrypt(&mut self, buffer: &mut [u8]) {
        let DuplexParams {
            rate,
            order,
            rounds_b,
            ..
        } = self.params;
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            self.decrypt_block(block);
            self.state.permute(rounds_b);
        }
        let tail = blocks.into_remainder();
        self.decrypt_block(tail);
        self.state.xor_byte(tail.len(), order.pad_byte(), order);
    }

    /// The state walk of [`Self::decrypt`] without producing plaintext.
    fn absorb_ciphertext(&mut self, ciphertext: &[u8]) {
        let DuplexParams {
            rate,
            order,
            rounds_b,
            ..
        } = self.params;
        let mut blocks = ciphertext.chunks_exact(rate);
        for block in &mut blocks {
            self.overwrite_rate(block);
            self.state.permute(rounds_b);
        }
        let tail = blocks.remainder();
        self.overwrite_rate(tail);
        self.state.xor_byte(tail.len(), order.pad_byte(), order);
    }

    fn overwrite_rate(&mut self, block: &[u8]) {
        let order = self.params.order;
        for (i, &c) in block.iter().enumerate() {
            let diff = self.state.byte(i, order) ^ c;
            self.state.xor_byte(i, diff, order);
        }
    }

    /// Leaves the ciphertext bytes in the rate and the plaintext in `block`.
    fn decrypt_block(&mut self, block: &mut [u8]) {
        let order = self.params.order;
        for (i, byte) in block.iter_mut().enumerate() {
            let plain = self.state.byte(i, order) ^ *byte;
            self.state.xor_byte(i, plain, order);
            *byte = plain;
        }
    }

    fn finalize(mut self) -> [u8; TAG_LEN] {
        let DuplexParams {
            rate,
            order,
            rounds_a,
            ..
        } = self.params;
        let first = rate / 8;
        debug_assert!(first + self.key.left.len() <= 5);
        for (i, &k) in self.key.left.iter().enumerate() {
            self.state[first + i] ^= k;
        }
        self.state.permute(rounds_a);
        self.state[3] ^= self.key.right[1];
        self.state[4] ^= self.key.right[2];
        let mut tag = [0u8; TAG_LEN];
        self.state.extract_bytes(24, &mut tag, order);
        tag
    }
}

fn seal(
    params: DuplexParams,
    key: &KeyWords,
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    buffer: &mut [u8],
) -> [u8; TAG_LEN] {
    let mut duplex = Duplex::start(params, key, nonce);
    duplex.absorb_associated_data(ad);
    duplex.encrypt(buffer);
    duplex.finalize()
}

/// Decrypts in place; on a tag mismatch `buffer` ends up all zero.
fn open(
    params: DuplexParams,
    key: &KeyWords,
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    buffer: &mut [u8],
    tag: &[u8; TAG_LEN],
) -> Choice {
    let mut duplex = Duplex::start(params, key, nonce);
    duplex.absorb_associated_data(ad);
    duplex.decrypt(buffer);
    let mut expected = duplex.finalize();
    let ok = ct::tags_match(&expected, tag);
    ct::wipe_if(buffer, !ok);
    expected.zeroize();
    ok
}

// --- Runtime-selected API ---

/// Encrypts `buffer` in place and returns the tag.
///
/// Every length check happens before the state is touched; on error
/// `buffer` is unchanged.
pub fn encrypt_in_place_detached(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    buffer: &mut [u8],
) -> Result<[u8; TAG_LEN]> {
    let params = *variant.params();
    let key = KeyWords::load(&params, key)?;
    let nonce = nonce_array(nonce)?;
    Ok(seal(params, &key, &nonce, ad, buffer))
}

/// Decrypts `buffer` in place. `Ok(false)` means the tag did not verify,
/// in which case `buffer` has been zeroed.
pub fn decrypt_in_place_detached(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    buffer: &mut [u8],
    tag: &[u8],
) -> Result<bool> {
    let params = *variant.params();
    let key = KeyWords::load(&params, key)?;
    let nonce = nonce_array(nonce)?;
    let tag = tag_array(tag)?;
    Ok(open(params, &key, &nonce, ad, buffer, &tag).into())
}

/// The full tag an honest sender would attach to `ciphertext`. Nothing
/// is decrypted; this is for checking truncated tags against a prefix.
pub fn ciphertext_tag(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; TAG_LEN]> {
    let params = *variant.params();
    let key = KeyWords::load(&params, key)?;
    let nonce = nonce_array(nonce)?;
    let mut duplex = Duplex::start(params, &key, &nonce);
    duplex.absorb_associated_data(ad);
    duplex.absorb_ciphertext(ciphertext);
    Ok(duplex.finalize())
}

/// Returns the ciphertext (same length as `plaintext`) and the tag.
pub fn encrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let mut ciphertext = plaintext.to_vec();
    let tag = encrypt_in_place_detached(variant, key, nonce, ad, &mut ciphertext)?;
    Ok((ciphertext, tag))
}

/// Returns whether the tag verified, and the plaintext. The plaintext is
/// all zero bytes when verification failed.
pub fn decrypt(
    variant: AeadVariant,
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<(bool, Vec<u8>)> {
    let mut plaintext = ciphertext.to_vec();
    let ok = decrypt_in_place_detached(variant, key, nonce, ad, &mut plaintext, tag)?;
    Ok((ok, plaintext))
}

//======================================================================
// AsconAead - `aead` trait front end
//======================================================================

/// Ascon AEAD cipher with a fixed variant, for use through the `aead`
/// traits.
#[derive(Clone, ZeroizeOnDrop)]
pub struct AsconAead<V: DuplexVariant> {
    key: KeyWords,
    _variant: PhantomData<V>,
}

impl<V: DuplexVariant> KeySizeUser for AsconAead<V> {
    type KeySize = V::KeySize;
}

impl<V: DuplexVariant> KeyInit for AsconAead<V> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: KeyWords::from_exact(V::PARAMS.order, key),
            _variant: PhantomData,
        }
    }
}

impl<V: DuplexVariant> AeadCore for AsconAead<V> {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl<V: DuplexVariant> AeadInPlace for AsconAead<V> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let nonce = nonce_array(nonce).map_err(|_| aead::Error)?;
        let tag = seal(V::PARAMS, &self.key, &nonce, associated_data, buffer);
        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let nonce = nonce_array(nonce).map_err(|_| aead::Error)?;
        let tag = tag_array(tag).map_err(|_| aead::Error)?;
        if bool::from(open(V::PARAMS, &self.key, &nonce, associated_data, buffer, &tag)) {
            Ok(())
        } else {
            Err(aead::Error)
        }
    }
}
