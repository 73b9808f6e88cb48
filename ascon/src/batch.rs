//======================================================================
// src/batch.rs
// Four messages of equal length hashed in lock-step, one permutation
// lane each.
//======================================================================

use crate::consts::HASH_DIGEST_LEN;
use crate::error::{Error, Result};
use crate::variant::{FixedOutputVariant, SpongeParams, SpongeVariant, XofVariant};
use ascon_perm::{permute_states_x4, State};

fn sponge_x4<V: SpongeVariant>(msgs: [&[u8]; 4], outs: [&mut [u8]; 4]) -> Result<()> {
    let len = msgs[0].len();
    let out_len = outs[0].len();
    if msgs.iter().any(|m| m.len() != len) || outs.iter().any(|o| o.len() != out_len) {
        return Err(Error::LaneLengthMismatch);
    }

    let SpongeParams {
        absorb_rate: rate,
        order,
        rounds_a,
        rounds_b,
        ..
    } = V::PARAMS;
    let mut states: [State; 4] = core::array::from_fn(|_| V::INITIAL_STATE);

    let full = len / rate;
    for blk in 0..full {
        let range = blk * rate..(blk + 1) * rate;
        for (state, msg) in states.iter_mut().zip(msgs.iter()) {
            state.xor_bytes(0, &msg[range.clone()], order);
        }
        permute_states_x4(&mut states, rounds_b);
    }
    for (state, msg) in states.iter_mut().zip(msgs.iter()) {
        let tail = &msg[full * rate..];
        state.xor_bytes(0, tail, order);
        state.xor_byte(tail.len(), order.pad_byte(), order);
    }
    permute_states_x4(&mut states, rounds_a);

    let mut written = 0;
    let mut outs = outs;
    loop {
        let take = rate.min(out_len - written);
        for (state, out) in states.iter().zip(outs.iter_mut()) {
            state.extract_bytes(0, &mut out[written..written + take], order);
        }
        written += take;
        if written == out_len {
            return Ok(());
        }
        permute_states_x4(&mut states, rounds_b);
    }
}

/// Hashes four equal-length messages; lane `i` equals the one-shot
/// digest of `msgs[i]`.
pub fn hash_x4<V: FixedOutputVariant>(msgs: [&[u8]; 4]) -> Result<[[u8; HASH_DIGEST_LEN]; 4]> {
    let mut digests = [[0u8; HASH_DIGEST_LEN]; 4];
    let [d0, d1, d2, d3] = &mut digests;
    sponge_x4::<V>(msgs, [d0, d1, d2, d3])?;
    Ok(digests)
}

/// XOF over four equal-length messages into four equal-length outputs.
pub fn xof_x4<V: XofVariant>(msgs: [&[u8]; 4], outs: [&mut [u8]; 4]) -> Result<()> {
    sponge_x4::<V>(msgs, outs)
}
